//! Entry point for the WASM application, built by trunk.

pub fn main() {
    blodinary::start();
}
