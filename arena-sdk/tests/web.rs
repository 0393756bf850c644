//! Browser-only checks, run with `wasm-pack test --headless --firefox arena-sdk`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use arena_sdk::api;
use arena_sdk::api::friend::FriendApi;
use arena_sdk::error::Error;
use arena_sdk::storage::{LocalToken, TokenStore};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn token_lives_in_local_storage() {
    LocalToken.clear();
    assert_eq!(api::token(), Err(Error::MissingToken));

    LocalToken.save("abc").unwrap();
    assert_eq!(LocalToken.load().as_deref(), Some("abc"));
    assert_eq!(api::token().unwrap(), "Bearer abc");

    LocalToken.clear();
    assert_eq!(LocalToken.load(), None);
}

#[wasm_bindgen_test]
async fn missing_token_short_circuits_friend_calls() {
    LocalToken.clear();
    let err = api::friends().friends().await.unwrap_err();
    assert_eq!(err, Error::MissingToken);
}
