use web_sys::window;

// Keys are written by the login flow, this module only reads them.
const USERNAME_KEY: &str = "username";
const USER_ID_KEY: &str = "id_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Display name of the signed-in user
pub fn get_username() -> Option<String> {
    get_item(USERNAME_KEY)
}

/// Id of the signed-in user, sent as `created_by`
pub fn get_user_id() -> Option<String> {
    get_item(USER_ID_KEY)
}
