//! Platform session storage constructor.
//!
//! Returns the [`store::SessionStorage`] the running platform should persist
//! the session to:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Native**: a file under `<data_dir>/notezilla/` via [`store::FileStorage`]

use store::SessionStorage;

pub fn make_storage() -> Box<dyn SessionStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Box::new(store::LocalStorage::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Box::new(store::MemoryStorage::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("notezilla");
        Box::new(store::FileStorage::new(base))
    }
}
