/// Public landing route.
pub async fn welcome() -> &'static str {
    "Welcome to myCinema!"
}
