use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

const PASSWORD: &str = "test-password-123";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_diary"))
}

/// Isolated home with its own config, data, and storage directories.
struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            root: tempdir().expect("create temp dir"),
        }
    }

    fn config_home(&self) -> PathBuf {
        self.root.path().join("config")
    }

    fn data_home(&self) -> PathBuf {
        self.root.path().join("data")
    }

    fn storage_dir(&self) -> PathBuf {
        self.root.path().join("journal")
    }

    fn config_path(&self) -> PathBuf {
        self.config_home().join("diary").join("config.toml")
    }

    /// Command with XDG dirs pointed into the sandbox and no account env.
    fn bare(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("HOME", self.root.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.data_home())
            .env_remove("DIARY_CONFIG")
            .env_remove("DIARY_DIR")
            .env_remove("DIARY_USER")
            .env_remove("DIARY_PASSWORD")
            .env_remove("DIARY_NEW_PASSWORD")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Command for alice in the sandbox storage directory.
    fn diary(&self) -> Command {
        let mut cmd = self.bare();
        cmd.env("DIARY_DIR", self.storage_dir())
            .env("DIARY_USER", "alice")
            .env("DIARY_PASSWORD", PASSWORD)
            .arg("--no-input");
        cmd
    }

    fn register(&self) {
        let output = self.diary().arg("register").output().expect("run register");
        assert_success(&output, "register");
    }

    fn add(&self, title: &str, body: &str, tags: &[&str]) {
        let mut cmd = self.diary();
        cmd.arg("add").arg(title).arg("--body").arg(body);
        for tag in tags {
            cmd.arg("--tag").arg(tag);
        }
        let output = cmd.output().expect("run add");
        assert_success(&output, "add");
    }
}

fn assert_success(output: &Output, what: &str) {
    assert!(
        output.status.success(),
        "{} failed: stdout={}, stderr={}",
        what,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn json_array(output: &Output) -> Vec<serde_json::Value> {
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("parse json");
    value.as_array().expect("json array").clone()
}

fn titles(entries: &[serde_json::Value]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            entry
                .get("title")
                .and_then(|v| v.as_str())
                .expect("entry title")
                .to_string()
        })
        .collect()
}

fn read_entries_file(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("entries.dat")).expect("read entries.dat")
}

#[test]
fn test_cli_register_add_list_show() {
    let sandbox = Sandbox::new();
    sandbox.register();
    sandbox.add("Day1", "Hello from CLI", &["work"]);

    let list = sandbox
        .diary()
        .arg("list")
        .arg("--json")
        .output()
        .expect("run list");
    assert_success(&list, "list");
    let entries = json_array(&list);
    assert_eq!(titles(&entries), vec!["Day1"]);
    assert_eq!(
        entries[0].get("tags").and_then(|v| v.as_str()),
        Some("work")
    );

    let show = sandbox
        .diary()
        .arg("show")
        .arg("Day1")
        .output()
        .expect("run show");
    assert_success(&show, "show");
    let stdout = String::from_utf8_lossy(&show.stdout);
    assert!(stdout.contains("Title: Day1"));
    assert!(stdout.contains("Tags: work"));
    assert!(stdout.contains("Hello from CLI"));
}

#[test]
fn test_cli_show_json() {
    let sandbox = Sandbox::new();
    sandbox.register();
    sandbox.add("Day1", "line one\nline two", &[]);

    let show = sandbox
        .diary()
        .arg("show")
        .arg("Day1")
        .arg("--json")
        .output()
        .expect("run show");
    assert_success(&show, "show");
    let value: serde_json::Value = serde_json::from_slice(&show.stdout).expect("parse json");
    assert_eq!(
        value.get("content").and_then(|v| v.as_str()),
        Some("line one\nline two")
    );
    assert!(value.get("created_at").is_some());
}

#[test]
fn test_cli_register_writes_default_config() {
    let sandbox = Sandbox::new();
    sandbox.register();

    assert!(sandbox.storage_dir().join("user.dat").exists());
    let config_path = sandbox.config_path();
    assert!(config_path.exists(), "config file should exist");

    let contents = std::fs::read_to_string(&config_path).expect("read config");
    let value: toml::Value = contents.parse().expect("parse config");
    assert_eq!(
        value
            .get("storage")
            .and_then(|section| section.get("path"))
            .and_then(|path| path.as_str()),
        Some(sandbox.storage_dir().to_string_lossy().as_ref())
    );
    assert_eq!(
        value
            .get("account")
            .and_then(|section| section.get("username"))
            .and_then(|name| name.as_str()),
        Some("alice")
    );
}

#[test]
fn test_cli_config_supplies_dir_and_user() {
    let sandbox = Sandbox::new();
    sandbox.register();
    sandbox.add("Day1", "hello", &[]);

    let list = sandbox
        .bare()
        .env("DIARY_PASSWORD", PASSWORD)
        .arg("list")
        .arg("--json")
        .output()
        .expect("run list");
    assert_success(&list, "list via config");
    assert_eq!(titles(&json_array(&list)), vec!["Day1"]);
}

#[test]
fn test_cli_config_env_override() {
    let sandbox = Sandbox::new();
    let override_path = sandbox.root.path().join("custom.toml");

    let register = sandbox
        .diary()
        .env("DIARY_CONFIG", &override_path)
        .arg("register")
        .output()
        .expect("run register");
    assert_success(&register, "register");
    assert!(override_path.exists());
    assert!(!sandbox.config_path().exists());
}

#[test]
fn test_cli_register_twice_fails() {
    let sandbox = Sandbox::new();
    sandbox.register();

    let again = sandbox
        .diary()
        .env("DIARY_USER", "bob")
        .arg("register")
        .output()
        .expect("run register");
    assert!(!again.status.success());
    assert_eq!(again.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&again.stderr);
    assert!(stderr.contains("already exists"));
}

#[test]
fn test_cli_missing_account_message() {
    let sandbox = Sandbox::new();

    let list = sandbox.diary().arg("list").output().expect("run list");
    assert!(!list.status.success());
    assert_eq!(list.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&list.stderr);
    assert!(stderr.contains("No account found at"));
    assert!(stderr.contains(&*sandbox.storage_dir().to_string_lossy()));
    assert!(stderr.contains("diary register"));
}

#[test]
fn test_cli_wrong_password_fails() {
    let sandbox = Sandbox::new();
    sandbox.register();

    let list = sandbox
        .diary()
        .env("DIARY_PASSWORD", "wrong-password")
        .arg("list")
        .output()
        .expect("run list");
    assert!(!list.status.success());
    assert_eq!(list.status.code(), Some(5));
    let stderr = String::from_utf8_lossy(&list.stderr);
    assert!(stderr.contains("Wrong username or password"));
}

#[test]
fn test_cli_no_input_requires_password() {
    let sandbox = Sandbox::new();
    sandbox.register();

    let list = sandbox
        .diary()
        .env_remove("DIARY_PASSWORD")
        .arg("list")
        .output()
        .expect("run list");
    assert!(!list.status.success());
    assert_eq!(list.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&list.stderr);
    assert!(stderr.contains("Set DIARY_PASSWORD"));
}

#[test]
fn test_cli_missing_user_fails() {
    let sandbox = Sandbox::new();

    let register = sandbox
        .bare()
        .env("DIARY_DIR", sandbox.storage_dir())
        .env("DIARY_PASSWORD", PASSWORD)
        .arg("register")
        .output()
        .expect("run register");
    assert!(!register.status.success());
    assert_eq!(register.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&register.stderr);
    assert!(stderr.contains("No username given"));
}

#[test]
fn test_cli_show_missing_entry() {
    let sandbox = Sandbox::new();
    sandbox.register();

    let show = sandbox
        .diary()
        .arg("show")
        .arg("Nope")
        .output()
        .expect("run show");
    assert!(!show.status.success());
    assert_eq!(show.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&show.stderr);
    assert!(stderr.contains("Entry \"Nope\" not found"));
}

#[test]
fn test_cli_duplicate_title_fails() {
    let sandbox = Sandbox::new();
    sandbox.register();
    sandbox.add("Day1", "hello", &[]);

    let again = sandbox
        .diary()
        .arg("add")
        .arg("Day1")
        .arg("--body")
        .arg("again")
        .output()
        .expect("run add");
    assert!(!again.status.success());
    assert_eq!(again.status.code(), Some(4));
}

#[test]
fn test_cli_search_by_tag_and_keyword() {
    let sandbox = Sandbox::new();
    sandbox.register();
    sandbox.add("Standup", "notes about the sprint", &["work"]);
    sandbox.add("Garden", "pulled weeds", &["home"]);

    let by_tag = sandbox
        .diary()
        .args(["search", "--tag", "work", "--json"])
        .output()
        .expect("run search");
    assert_success(&by_tag, "search by tag");
    assert_eq!(titles(&json_array(&by_tag)), vec!["Standup"]);

    let by_keyword = sandbox
        .diary()
        .args(["search", "--keyword", "weeds", "--json"])
        .output()
        .expect("run search");
    assert_success(&by_keyword, "search by keyword");
    assert_eq!(titles(&json_array(&by_keyword)), vec!["Garden"]);

    let none = sandbox
        .diary()
        .args(["search", "--keyword", "Weeds"])
        .output()
        .expect("run search");
    assert_success(&none, "search without matches");
    assert!(String::from_utf8_lossy(&none.stdout).contains("No entries found."));
}

#[test]
fn test_cli_search_by_date() {
    let sandbox = Sandbox::new();
    sandbox.register();
    sandbox.add("Day1", "hello", &[]);

    let old = sandbox
        .diary()
        .args(["search", "--date", "1999-12-31", "--json"])
        .output()
        .expect("run search");
    assert_success(&old, "search by date");
    assert!(json_array(&old).is_empty());

    let bad = sandbox
        .diary()
        .args(["search", "--date", "yesterday"])
        .output()
        .expect("run search");
    assert!(!bad.status.success());
    assert_eq!(bad.status.code(), Some(4));
}

#[test]
fn test_cli_search_requires_criterion() {
    let sandbox = Sandbox::new();
    let search = sandbox.diary().arg("search").output().expect("run search");
    assert!(!search.status.success());
}

#[test]
fn test_cli_edit_and_delete() {
    let sandbox = Sandbox::new();
    sandbox.register();
    sandbox.add("Day1", "hello", &["work"]);

    let edit = sandbox
        .diary()
        .args(["edit", "Day1", "--body", "changed", "--rename", "Day one"])
        .output()
        .expect("run edit");
    assert_success(&edit, "edit");

    let show = sandbox
        .diary()
        .args(["show", "Day one", "--json"])
        .output()
        .expect("run show");
    assert_success(&show, "show");
    let value: serde_json::Value = serde_json::from_slice(&show.stdout).expect("parse json");
    assert_eq!(value.get("content").and_then(|v| v.as_str()), Some("changed"));
    assert_eq!(value.get("tags").and_then(|v| v.as_str()), Some("work"));

    let delete = sandbox
        .diary()
        .args(["delete", "Day one"])
        .output()
        .expect("run delete");
    assert_success(&delete, "delete");

    let again = sandbox
        .diary()
        .args(["delete", "Day one"])
        .output()
        .expect("run delete");
    assert_eq!(again.status.code(), Some(3));

    let list = sandbox
        .diary()
        .args(["list", "--json"])
        .output()
        .expect("run list");
    assert!(json_array(&list).is_empty());
}

#[test]
fn test_cli_edit_requires_change() {
    let sandbox = Sandbox::new();
    sandbox.register();
    sandbox.add("Day1", "hello", &[]);

    let edit = sandbox
        .diary()
        .args(["edit", "Day1"])
        .output()
        .expect("run edit");
    assert_eq!(edit.status.code(), Some(4));
}

#[test]
fn test_cli_passwd() {
    let sandbox = Sandbox::new();
    sandbox.register();
    sandbox.add("Day1", "hello", &[]);

    let passwd = sandbox
        .diary()
        .env("DIARY_NEW_PASSWORD", "new-password-456")
        .arg("passwd")
        .output()
        .expect("run passwd");
    assert_success(&passwd, "passwd");

    let old = sandbox.diary().arg("list").output().expect("run list");
    assert_eq!(old.status.code(), Some(5));

    let show = sandbox
        .diary()
        .env("DIARY_PASSWORD", "new-password-456")
        .args(["show", "Day1", "--json"])
        .output()
        .expect("run show");
    assert_success(&show, "show after passwd");
    let value: serde_json::Value = serde_json::from_slice(&show.stdout).expect("parse json");
    assert_eq!(value.get("content").and_then(|v| v.as_str()), Some("hello"));
}

#[test]
fn test_cli_plaintext_not_on_disk() {
    let sandbox = Sandbox::new();
    sandbox.register();
    sandbox.add("Day1", "a very private thought", &["secret-tag"]);

    let contents = read_entries_file(&sandbox.storage_dir());
    assert!(contents.starts_with("1\nDay1\n"));
    assert!(!contents.contains("private thought"));

    let user = std::fs::read_to_string(sandbox.storage_dir().join("user.dat")).expect("read");
    assert!(!user.contains(PASSWORD));
}

#[test]
fn test_cli_quiet_suppresses_output() {
    let sandbox = Sandbox::new();
    let register = sandbox
        .diary()
        .arg("--quiet")
        .arg("register")
        .output()
        .expect("run register");
    assert_success(&register, "register");
    assert!(register.stdout.is_empty());
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let sandbox = Sandbox::new();
    sandbox.register();

    let list = sandbox
        .diary()
        .args(["--verbose", "list"])
        .output()
        .expect("run list");
    assert_success(&list, "list");
    let stderr = String::from_utf8_lossy(&list.stderr);
    assert!(stderr.contains("DEBUG"));
    assert!(!stderr.contains(PASSWORD));
}

#[test]
fn test_cli_completions() {
    let output = Command::new(bin())
        .args(["completions", "bash"])
        .output()
        .expect("run completions");
    assert_success(&output, "completions");
    assert!(String::from_utf8_lossy(&output.stdout).contains("diary"));
}
