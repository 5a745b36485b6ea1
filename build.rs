use std::path::Path;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=tailwind.css");
    println!("cargo:rerun-if-changed=tailwind.config.js");
    println!("cargo:rerun-if-changed=src/ui");

    let manifest_dir = env!("CARGO_MANIFEST_DIR");

    // Regenerate the stylesheet from the class names used in the components
    let output = Command::new("npx")
        .arg("tailwindcss")
        .args(["-i", "tailwind.css", "-o", "assets/tailwind.css", "--minify"])
        .current_dir(manifest_dir)
        .output();

    match output {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            println!("cargo:warning=Failed to generate Tailwind CSS");
            println!(
                "cargo:warning=STDERR: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Err(e) => {
            println!("cargo:warning=Failed to run tailwindcss: {}", e);
        }
    }

    if !Path::new(manifest_dir).join("assets/tailwind.css").exists() {
        println!("cargo:warning=assets/tailwind.css is missing, the UI will be unstyled");
    }
}
