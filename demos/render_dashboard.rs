use espn_dashboard::{AppState, EspnClient};

#[tokio::main]
async fn main() {
    let client = EspnClient::new();
    let mut state = AppState::new();

    // Today's fixtures plus the current table, fetched concurrently.
    state.load_all(&client).await;
    println!("<!-- {} -->", state.status);
    println!("{}", state.render_matches());
    println!("{}", state.render_table());

    // Tomorrow's fixtures only, the way a date-tab click would.
    state.set_offset(1);
    state.load_matches(&client).await;
    println!("<!-- {} -->", state.status);
    println!("{}", state.render_matches());
}
