use wasm_bindgen::prelude::*;

/// Version information for the frontend application
pub struct Version;

impl Version {
    /// Returns the current version of the application
    pub fn current() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn name() -> &'static str {
        env!("CARGO_PKG_NAME")
    }

    /// Returns a short version string
    pub fn short() -> String {
        format!("v{}", Self::current())
    }

    /// Version plus commit, when the build provides `GIT_COMMIT`.
    pub fn build_info() -> String {
        let git_commit = option_env!("GIT_COMMIT").unwrap_or("unknown");
        format!("{} v{} (commit: {})", Self::name(), Self::current(), git_commit)
    }
}

#[wasm_bindgen]
pub fn get_build_info() -> String {
    Version::build_info()
}
