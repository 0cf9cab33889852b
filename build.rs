const COMMANDS: &[&str] = &["invoke_method"];

fn main() {
    // Generates the allow/deny permission files for every IPC command
    tauri_plugin::Builder::new(COMMANDS).build();
}
