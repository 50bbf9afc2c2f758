fn main() {
    // Mounting happens in the library's `start`; trunk runs this entry
    // point when the wasm bundle loads. Native builds have nothing to do.
    #[cfg(target_arch = "wasm32")]
    citasbot_frontend::start();
}
