use mockito::Matcher;
use std::env;

#[tokio::test]
async fn test_top_level_functions_read_environment() {
    let mut server = mockito::Server::new_async().await;
    let _list = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("c".into(), "Seafood".into()))
        .with_status(200)
        .with_body(r#"{"meals": [{"strMeal": "Fish pie", "strMealThumb": "https://img/f.jpg", "idMeal": "52802"}]}"#)
        .create_async()
        .await;
    let _lookup = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52802".into()))
        .with_status(200)
        .with_body(
            r#"{"meals": [{
                "idMeal": "52802",
                "strMeal": "Fish pie",
                "strArea": "British",
                "strInstructions": "Put the potatoes in a large pan.",
                "strYoutube": "",
                "strIngredient1": "Floury Potatoes",
                "strMeasure1": "900g"
            }]}"#,
        )
        .create_async()
        .await;

    env::set_var("RECIPES__BASE_URL", server.url());

    let recipes = recipe_catalog::fetch_recipes("Seafood").await.unwrap();
    assert_eq!(recipes[0].name, "Fish pie");

    let detail = recipe_catalog::fetch_recipe_details(&recipes[0].id).await.unwrap();
    assert_eq!(detail.ingredients[0].name, "Floury Potatoes");
    assert_eq!(detail.ingredients[0].measurement, "900g");
    assert_eq!(detail.youtube_url, "");

    env::remove_var("RECIPES__BASE_URL");
}
