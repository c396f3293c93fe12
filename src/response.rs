/// Whether an HTTP status code is acceptable (2xx). Nothing else about the response is considered.
pub fn is_acceptable_status(status: u16) -> bool {
    (200..=299).contains(&status)
}
