//! Test doubles for the external collaborators

use crate::config::LaunchpadConfig;
use crate::error::{Error, InstallError, InstallErrorKind, LaunchError, Result};
use crate::handler::{ProjectHandler, Services};
use crate::installer::LibraryInstaller;
use crate::project::{PostInstallationStep, ProjectDir, ProjectType};
use crate::prompt::{Choice, PromptService};
use crate::runtime::{command_line, CommandOptions, CommandRunner, Toolchain};
use crate::templates::BuiltinTemplates;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A recorded command execution
#[derive(Debug, Clone)]
pub struct Invocation {
    pub command: String,
    pub args: Vec<String>,
    pub options: CommandOptions,
}

impl Invocation {
    pub fn line(&self) -> String {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        command_line(&self.command, &args)
    }
}

/// Command runner that records calls and answers with scripted exit codes.
///
/// Rules match when the full command line contains the pattern; the first
/// matching rule wins, unmatched commands exit 0.
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<Invocation>>,
    exit_codes: Vec<(String, i32)>,
    launch_failures: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exit_with(mut self, pattern: &str, code: i32) -> Self {
        self.exit_codes.push((pattern.to_string(), code));
        self
    }

    pub fn fail_launch(mut self, pattern: &str) -> Self {
        self.launch_failures.push(pattern.to_string());
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.invocations().iter().map(Invocation::line).collect()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn execute(
        &self,
        command: &str,
        args: &[&str],
        options: &CommandOptions,
    ) -> std::result::Result<i32, LaunchError> {
        let line = command_line(command, args);
        self.calls.lock().unwrap().push(Invocation {
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            options: options.clone(),
        });

        if self.launch_failures.iter().any(|p| line.contains(p.as_str())) {
            return Err(LaunchError {
                command: command.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            });
        }

        Ok(self
            .exit_codes
            .iter()
            .find(|(p, _)| line.contains(p.as_str()))
            .map(|(_, code)| *code)
            .unwrap_or(0))
    }
}

/// A scripted answer for [`ScriptedPrompts`]
#[derive(Debug, Clone)]
pub enum Answer {
    Text(String),
    Single(String),
    Multi(Vec<String>),
}

/// Prompt service that replays queued answers and records the questions
#[derive(Default)]
pub struct ScriptedPrompts {
    answers: Mutex<VecDeque<Answer>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompts {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    fn next(&self, message: &str) -> Result<Answer> {
        self.asked.lock().unwrap().push(message.to_string());
        self.answers.lock().unwrap().pop_front().ok_or_else(|| {
            Error::Prompt(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no scripted answer for {message:?}"),
            ))
        })
    }
}

fn unexpected(answer: Answer) -> Error {
    Error::Prompt(io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("unexpected scripted answer {answer:?}"),
    ))
}

impl PromptService for ScriptedPrompts {
    fn ask_non_empty_text(&self, message: &str) -> Result<String> {
        loop {
            match self.next(message)? {
                Answer::Text(t) if t.trim().is_empty() => continue,
                Answer::Text(t) => return Ok(t.trim().to_string()),
                other => return Err(unexpected(other)),
            }
        }
    }

    fn ask_single_choice(&self, message: &str, choices: &[Choice]) -> Result<String> {
        match self.next(message)? {
            Answer::Single(v) if choices.iter().any(|c| c.value == v) => Ok(v),
            other => Err(unexpected(other)),
        }
    }

    fn ask_multi_choice(
        &self,
        message: &str,
        choices: &[Choice],
        required: bool,
    ) -> Result<Vec<String>> {
        match self.next(message)? {
            Answer::Multi(vs)
                if vs.iter().all(|v| choices.iter().any(|c| &c.value == v))
                    && (!required || !vs.is_empty()) =>
            {
                Ok(vs)
            }
            other => Err(unexpected(other)),
        }
    }
}

/// Installer that counts installs and optionally fails
pub struct SpyInstaller {
    name: &'static str,
    fail: bool,
    installs: AtomicUsize,
    log: Option<Arc<Mutex<Vec<&'static str>>>>,
}

impl SpyInstaller {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            fail: false,
            installs: AtomicUsize::new(0),
            log: None,
        })
    }

    pub fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            fail: true,
            installs: AtomicUsize::new(0),
            log: None,
        })
    }

    pub fn shared_log() -> Arc<Mutex<Vec<&'static str>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    pub fn logging(name: &'static str, log: &Arc<Mutex<Vec<&'static str>>>) -> Arc<Self> {
        Arc::new(Self {
            name,
            fail: false,
            installs: AtomicUsize::new(0),
            log: Some(log.clone()),
        })
    }

    pub fn install_count(&self) -> usize {
        self.installs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LibraryInstaller for SpyInstaller {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn install(&self, _project: &ProjectDir) -> std::result::Result<(), InstallError> {
        self.installs.fetch_add(1, Ordering::SeqCst);
        if let Some(log) = &self.log {
            log.lock().unwrap().push(self.name);
        }
        if self.fail {
            return Err(InstallError::new(
                self.name,
                InstallErrorKind::CommandFailed {
                    command: format!("spy {}", self.name),
                    code: 1,
                },
            ));
        }
        Ok(())
    }

    fn post_installation_steps(&self) -> Vec<PostInstallationStep> {
        vec![PostInstallationStep::new(
            "spy",
            &[self.name],
            "Recorded by the spy installer",
        )]
    }
}

/// Handler whose `create` result is scripted and whose calls are counted
pub struct SpyHandler {
    project_type: ProjectType,
    create_result: bool,
    creates: AtomicUsize,
    post_setups: Mutex<Vec<PathBuf>>,
}

impl SpyHandler {
    pub fn new(project_type: ProjectType, create_result: bool) -> Arc<Self> {
        Arc::new(Self {
            project_type,
            create_result,
            creates: AtomicUsize::new(0),
            post_setups: Mutex::new(Vec::new()),
        })
    }

    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn post_setup_roots(&self) -> Vec<PathBuf> {
        self.post_setups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectHandler for SpyHandler {
    fn project_type(&self) -> ProjectType {
        self.project_type
    }

    async fn create(&self, _base_dir: &Path, _project_name: &str) -> Result<bool> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        Ok(self.create_result)
    }

    async fn post_setup(&self, project: &ProjectDir) -> Result<Vec<PostInstallationStep>> {
        self.post_setups
            .lock()
            .unwrap()
            .push(project.root().to_path_buf());
        Ok(vec![PostInstallationStep::new("spy", &["post-setup"], "Spy step")])
    }
}

/// Services wired to a recording runner, scripted prompts and built-in templates
pub fn services(runner: Arc<RecordingRunner>, prompts: Arc<ScriptedPrompts>) -> Services {
    Services {
        toolchain: Toolchain::new(runner, Arc::new(LaunchpadConfig::default())),
        prompts,
        templates: Arc::new(BuiltinTemplates),
    }
}
