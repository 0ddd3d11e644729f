#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Nothing listens here, so any request fails fast with a network error.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// Helper struct to run dex commands against an isolated data root
pub struct DexTest {
    pub temp_dir: TempDir,
    binary_path: String,
    api_url: String,
}

impl DexTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        DexTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_dex").to_string(),
            api_url: UNREACHABLE_API.to_string(),
        }
    }

    /// Point catalog requests at `url` instead of the unreachable default.
    pub fn with_api(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(&self.binary_path);
        command
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("DEX_ROOT", self.temp_dir.path())
            .env("DEX_API_URL", &self.api_url)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute dex command")
    }

    /// Run with `input` written to stdin, then stdin closed.
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn dex command");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        child.wait_with_output().expect("Failed to wait for dex")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_success(args);
        serde_json::from_str(&stdout).unwrap_or_else(|e| {
            panic!("Command {:?} printed invalid JSON ({e}):\n{stdout}", args)
        })
    }

    pub fn read_pref(&self, key: &str) -> Option<String> {
        let path = self
            .temp_dir
            .path()
            .join("prefs")
            .join(format!("{key}.json"));
        fs::read_to_string(path).ok()
    }

    pub fn write_pref(&self, key: &str, content: &str) {
        let dir = self.temp_dir.path().join("prefs");
        fs::create_dir_all(&dir).expect("Failed to create prefs directory");
        fs::write(dir.join(format!("{key}.json")), content).expect("Failed to write pref file");
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.temp_dir.path().join("config.yaml"), content)
            .expect("Failed to write config file");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.temp_dir.path().join("config.yaml"))
            .expect("Failed to read config file")
    }
}

/// Serve canned responses keyed by request target (path plus query) on a
/// local port, one connection at a time, until the test process exits.
/// `routes` receives the base URL so bodies can link back to the server.
/// Unknown targets get a 404. Returns the base URL.
pub fn serve_catalog(
    routes: impl FnOnce(&str) -> HashMap<String, (u16, String)>,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let base = format!("http://{}", listener.local_addr().expect("listener has an address"));
    let routes = routes(&base);

    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            // Drain headers.
            let mut header = String::new();
            while reader.read_line(&mut header).map(|n| n > 2).unwrap_or(false) {
                header.clear();
            }

            let target = request_line.split_whitespace().nth(1).unwrap_or("/");
            let (status, body) = routes
                .get(target)
                .cloned()
                .unwrap_or((404, "{\"detail\":\"Not found.\"}".to_string()));
            let response = format!(
                "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    base
}

/// Minimal `pokemon/{id}` body with the fields the list renders.
pub fn pokemon_json(id: u32, name: &str, types: &[&str], height: u32, weight: u32) -> String {
    let types: Vec<serde_json::Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| serde_json::json!({ "slot": i + 1, "type": { "name": t, "url": "" } }))
        .collect();
    serde_json::json!({
        "id": id,
        "name": name,
        "height": height,
        "weight": weight,
        "base_experience": 64,
        "types": types,
        "sprites": { "front_default": null, "other": null },
        "stats": [
            { "base_stat": 45, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 49, "stat": { "name": "attack", "url": "" } }
        ],
        "abilities": [
            { "ability": { "name": "overgrow", "url": "" }, "is_hidden": false }
        ]
    })
    .to_string()
}

/// `pokemon?offset=..&limit=..` body whose summaries point back at `base`.
pub fn page_json(base: &str, count: u64, entries: &[(u32, &str)]) -> String {
    let results: Vec<serde_json::Value> = entries
        .iter()
        .map(|(id, name)| serde_json::json!({ "name": name, "url": format!("{base}/pokemon/{id}/") }))
        .collect();
    serde_json::json!({ "count": count, "next": null, "previous": null, "results": results })
        .to_string()
}
