// On wasm32 the library's start hook mounts the app when the module loads.
use hr_assistant_frontend as _;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    hr_assistant_frontend::start();
}
