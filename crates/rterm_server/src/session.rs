//! Interpreter ownership.
//!
//! In `shared` mode every request runs against one interpreter. In
//! `per-session` mode each client-supplied session id gets its own
//! interpreter and therefore its own working directory; requests without an
//! id, and new ids once the table is full, use the shared one. Either way a
//! mutex serializes commands per interpreter.

use std::path::PathBuf;
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use rterm_builtins::RegistryProfile;
use rterm_core::{Interpreter, Registry, ShellResult};
use tracing::{debug, warn};

use crate::config::{ServerConfig, SessionMode};

pub type SharedInterpreter = Arc<Mutex<Interpreter>>;

pub struct Sessions {
    mode: SessionMode,
    profile: RegistryProfile,
    root: PathBuf,
    max_sessions: usize,
    shared: SharedInterpreter,
    sessions: DashMap<String, SharedInterpreter>,
    /// Held while a new session is admitted so the cap cannot be overshot.
    admission: Mutex<()>,
}

impl Sessions {
    pub fn new(
        mode: SessionMode,
        profile: RegistryProfile,
        root: impl Into<PathBuf>,
        max_sessions: usize,
    ) -> ShellResult<Self> {
        let root = root.into();
        let shared = Arc::new(Mutex::new(rterm_builtins::interpreter(profile, &root)?));
        Ok(Self {
            mode,
            profile,
            root,
            max_sessions,
            shared,
            sessions: DashMap::new(),
            admission: Mutex::new(()),
        })
    }

    pub fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        Ok(Self::new(
            config.session_mode,
            config.registry_profile,
            config.root()?,
            config.max_sessions,
        )?)
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn registry(&self) -> Arc<Registry> {
        rterm_builtins::registry(self.profile)
    }

    /// Number of tracked per-session interpreters.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// The interpreter a request with `session` should run against.
    pub fn interpreter(&self, session: Option<&str>) -> SharedInterpreter {
        let id = match (self.mode, session.map(str::trim)) {
            (SessionMode::PerSession, Some(id)) if !id.is_empty() => id,
            _ => return Arc::clone(&self.shared),
        };

        if let Some(existing) = self.sessions.get(id) {
            return Arc::clone(existing.value());
        }

        self.admit(id)
    }

    /// Create the interpreter for a new `id`, or fall back to the shared one
    /// when the table is full.
    fn admit(&self, id: &str) -> SharedInterpreter {
        let _admitting = self.admission.lock();

        // Another request may have created it while we waited.
        if let Some(existing) = self.sessions.get(id) {
            return Arc::clone(existing.value());
        }

        if self.sessions.len() >= self.max_sessions {
            warn!(session = id, max_sessions = self.max_sessions, "session table full, using shared interpreter");
            return Arc::clone(&self.shared);
        }

        match rterm_builtins::interpreter(self.profile, &self.root) {
            Ok(interp) => {
                let interp = Arc::new(Mutex::new(interp));
                self.sessions.insert(id.to_string(), Arc::clone(&interp));
                debug!(session = id, sessions = self.sessions.len(), "session created");
                interp
            }
            Err(err) => {
                warn!(session = id, error = %err, "cannot create session interpreter, using shared interpreter");
                Arc::clone(&self.shared)
            }
        }
    }

    /// Run one command line. Blocks for the duration of the command.
    pub fn execute(&self, session: Option<&str>, line: &str) -> String {
        let interpreter = self.interpreter(session);
        let mut guard = interpreter.lock();
        guard.execute(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sessions(mode: SessionMode, max: usize) -> (TempDir, Sessions) {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let sessions = Sessions::new(mode, RegistryProfile::Core, dir.path(), max).unwrap();
        (dir, sessions)
    }

    #[test]
    fn shared_mode_ignores_session_ids() {
        let (_dir, s) = sessions(SessionMode::Shared, 4);
        s.execute(Some("a"), "cd sub");
        assert!(s.execute(Some("b"), "pwd").ends_with("sub"));
        assert!(s.is_empty());
    }

    #[test]
    fn per_session_mode_isolates_working_directories() {
        let (_dir, s) = sessions(SessionMode::PerSession, 4);
        s.execute(Some("a"), "cd sub");
        assert!(s.execute(Some("a"), "pwd").ends_with("sub"));
        assert!(!s.execute(Some("b"), "pwd").ends_with("sub"));
        assert!(!s.execute(None, "pwd").ends_with("sub"));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn full_table_falls_back_to_shared() {
        let (_dir, s) = sessions(SessionMode::PerSession, 1);
        s.execute(Some("a"), "pwd");
        let overflow = s.interpreter(Some("b"));
        assert!(Arc::ptr_eq(&overflow, &s.interpreter(None)));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn concurrent_new_sessions_respect_the_cap() {
        let (_dir, s) = sessions(SessionMode::PerSession, 4);
        std::thread::scope(|scope| {
            for t in 0..8 {
                let s = &s;
                scope.spawn(move || {
                    for i in 0..4 {
                        s.interpreter(Some(&format!("client-{t}-{i}")));
                    }
                });
            }
        });
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn concurrent_requests_for_one_id_share_an_interpreter() {
        let (_dir, s) = sessions(SessionMode::PerSession, 4);
        let handles: Vec<SharedInterpreter> = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..8).map(|_| scope.spawn(|| s.interpreter(Some("same")))).collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });
        assert!(handles.iter().all(|h| Arc::ptr_eq(h, &handles[0])));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn blank_ids_use_shared() {
        let (_dir, s) = sessions(SessionMode::PerSession, 4);
        assert!(Arc::ptr_eq(&s.interpreter(Some("  ")), &s.interpreter(None)));
        assert!(s.is_empty());
    }
}
