#![allow(non_snake_case)]

use society_portal::client;

fn main() {
    dotenvy::dotenv().ok();

    dioxus::launch(client::App);
}
