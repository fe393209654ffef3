//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use proxygen_gen::config::GeneratorConfig;
use proxygen_gen::emitter::{EmitterOptions, TargetLanguage};
use proxygen_gen::errors::GeneratorError;
use proxygen_gen::output::OutputWriter;
use proxygen_gen::progress::{ProgressEvent, ProgressSink};
use url::Url;

/// Module `App` with one `user` controller exposing `getById(id) -> UserDto`
/// and `getList(filter?, maxResultCount?) -> UserDto[]`.
pub const USER_DOCUMENT: &str = r#"{
    "modules": {
        "App": {
            "remoteServiceName": "app",
            "controllers": {
                "UserController": {
                    "controllerName": "User",
                    "controllerGroupName": "user",
                    "actions": [
                        {
                            "name": "getById",
                            "httpMethod": "GET",
                            "urlTemplate": "/api/app/user/{id}",
                            "parameters": [
                                { "name": "id", "bindingKind": "path", "typeRef": "System.Int32" }
                            ],
                            "returnTypeRef": "UserDto"
                        },
                        {
                            "name": "getList",
                            "httpMethod": "GET",
                            "urlTemplate": "/api/app/user",
                            "parameters": [
                                { "name": "filter", "bindingKind": "query", "typeRef": "System.String", "optional": true },
                                { "name": "maxResultCount", "bindingKind": "query", "typeRef": "System.Int32", "optional": true }
                            ],
                            "returnTypeRef": "UserDto[]"
                        }
                    ]
                }
            }
        }
    },
    "types": {
        "System.String": { "kind": "primitive", "primitive": "text" },
        "System.Int32": { "kind": "primitive", "primitive": "integer" },
        "UserDto": {
            "kind": "structured",
            "name": "UserDto",
            "fields": [
                { "name": "id", "typeRef": "System.Int32" },
                { "name": "name", "typeRef": "System.String", "nullable": true }
            ]
        },
        "UserDto[]": { "kind": "array", "element": "UserDto" }
    }
}"#;

/// Two controllers sharing the `user` group, so both map to the same files.
pub const COLLIDING_DOCUMENT: &str = r#"{
    "modules": {
        "App": {
            "remoteServiceName": "app",
            "controllers": {
                "UserController": {
                    "controllerName": "User",
                    "controllerGroupName": "user",
                    "actions": [
                        { "name": "first", "httpMethod": "GET", "urlTemplate": "/first" }
                    ]
                },
                "UserAdminController": {
                    "controllerName": "UserAdmin",
                    "controllerGroupName": "user",
                    "actions": [
                        { "name": "second", "httpMethod": "GET", "urlTemplate": "/second" }
                    ]
                }
            }
        }
    },
    "types": {}
}"#;

/// A valid controller followed by one referencing an unmapped primitive kind.
pub const UNSUPPORTED_DOCUMENT: &str = r#"{
    "modules": {
        "App": {
            "remoteServiceName": "app",
            "controllers": {
                "GoodController": {
                    "controllerName": "Good",
                    "controllerGroupName": "good",
                    "actions": [
                        { "name": "ping", "httpMethod": "GET", "urlTemplate": "/ping" }
                    ]
                },
                "PriceController": {
                    "controllerName": "Price",
                    "controllerGroupName": "price",
                    "actions": [
                        {
                            "name": "get",
                            "httpMethod": "GET",
                            "urlTemplate": "/price",
                            "returnTypeRef": "System.Decimal"
                        }
                    ]
                }
            }
        }
    },
    "types": {
        "System.Decimal": { "kind": "primitive", "primitive": "decimal128" }
    }
}"#;

/// Saves `document` under `dir` and returns its `file://` URL.
pub fn save_document(dir: &Path, document: &str) -> String {
    let path = dir.join("api-definition.json");
    std::fs::write(&path, document).expect("Failed to write schema document");
    Url::from_file_path(&path)
        .expect("Failed to build file URL")
        .to_string()
}

/// A configuration with defaults for everything but the inputs.
pub fn make_config(url: &str, module: &str, output: &Path) -> GeneratorConfig {
    GeneratorConfig {
        url: url.to_string(),
        module: module.to_string(),
        output: output.to_path_buf(),
        target: TargetLanguage::Ts,
        dry_run: false,
        timeout: Duration::from_secs(5),
        emitter: EmitterOptions::default(),
    }
}

/// Every regular file below `root`, relative to it, sorted.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    fn walk(root: &Path, dir: &Path, files: &mut Vec<PathBuf>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(root, &path, files);
            } else if let Ok(relative) = path.strip_prefix(root) {
                files.push(relative.to_path_buf());
            }
        }
    }

    let mut files = Vec::new();
    walk(root, root, &mut files);
    files.sort();
    files
}

/// Writer that keeps every write in memory.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    writes: Mutex<Vec<(PathBuf, String)>>,
}

impl MemoryWriter {
    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        self.writes.lock().expect("writer lock poisoned").clone()
    }
}

impl OutputWriter for MemoryWriter {
    fn write(
        &self,
        path: &Path,
        content: &str,
    ) -> impl Future<Output = Result<(), GeneratorError>> + Send {
        let entry = (path.to_path_buf(), content.to_string());
        async move {
            self.writes.lock().expect("writer lock poisoned").push(entry);
            Ok(())
        }
    }
}

/// Progress sink that records every event.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().expect("progress lock poisoned").clone()
    }
}

impl ProgressSink for RecordingProgress {
    fn report(&self, event: ProgressEvent) {
        self.events.lock().expect("progress lock poisoned").push(event);
    }
}
