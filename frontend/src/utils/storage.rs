use web_sys::Storage;

pub fn local_storage() -> Result<Storage, String> {
    web_sys::window()
        .ok_or_else(|| "No window object".to_string())?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn read_key(key: &str) -> Option<String> {
    local_storage().ok()?.get_item(key).ok().flatten()
}

pub fn write_key(key: &str, value: &str) {
    if let Ok(storage) = local_storage() {
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("localStorage write failed for {}: {:?}", key, err);
        }
    }
}

pub fn remove_key(key: &str) {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
