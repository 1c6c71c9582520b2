#![allow(dead_code)]

use std::{
    fs,
    future::Future,
    path::{Path, PathBuf},
    sync::Mutex,
};

use open_unity::{
    extension::InvocationContext,
    host::HostUi,
    lib::shell::Platform,
    settings::DEFAULT_SCRIPT_PATH,
};
use tempfile::{tempdir, TempDir};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_open-unity");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Error(String),
    Info(String),
    ProgressStarted(String),
    ProgressFinished(String),
}

/// Host that records every UI call in order.
#[derive(Debug, Default)]
pub struct RecordingHost {
    events: Mutex<Vec<HostEvent>>,
}

impl RecordingHost {
    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().expect("events lock").clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                HostEvent::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                HostEvent::Info(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn progress_started(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, HostEvent::ProgressStarted(_)))
            .count()
    }

    fn push(&self, event: HostEvent) {
        self.events.lock().expect("events lock").push(event);
    }
}

impl HostUi for RecordingHost {
    fn show_error(&self, message: &str) {
        self.push(HostEvent::Error(message.to_string()));
    }

    fn show_info(&self, message: &str) {
        self.push(HostEvent::Info(message.to_string()));
    }

    fn with_progress<F>(&self, title: &str, op: F) -> impl Future<Output = F::Output>
    where
        F: Future,
    {
        async move {
            self.push(HostEvent::ProgressStarted(title.to_string()));
            let output = op.await;
            self.push(HostEvent::ProgressFinished(title.to_string()));
            output
        }
    }
}

/// Throwaway workspace and installation directories.
pub struct Fixture {
    pub workspace: TempDir,
    pub extension: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            workspace: tempdir().expect("can create workspace"),
            extension: tempdir().expect("can create extension dir"),
        }
    }

    pub fn context(&self) -> InvocationContext {
        InvocationContext {
            workspace_root: Some(self.workspace.path().to_path_buf()),
            extension_dir: self.extension.path().to_path_buf(),
            platform: Platform::current(),
        }
    }

    pub fn context_without_workspace(&self) -> InvocationContext {
        InvocationContext {
            workspace_root: None,
            ..self.context()
        }
    }

    pub fn write_workspace_script(&self, relative: &str, body: &str) -> PathBuf {
        write_file(&self.workspace.path().join(relative), body)
    }

    pub fn write_bundled_script(&self, body: &str) -> PathBuf {
        write_file(&self.extension.path().join(DEFAULT_SCRIPT_PATH), body)
    }

    pub fn workspace_file(&self, relative: &str) -> PathBuf {
        self.workspace.path().join(relative)
    }
}

pub fn write_file(path: &Path, contents: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("can create parent directory");
    }
    fs::write(path, contents).expect("can write file");
    path.to_path_buf()
}

pub fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).expect("path can be canonicalized")
}
