use crate::domain::ClassSession;
use std::collections::HashMap;

/// Looks up the class sessions students can submit attendance for.
pub trait SessionDirectory {
    fn find_by_code(&self, code: &str) -> Option<&ClassSession>;
    fn find_by_code_mut(&mut self, code: &str) -> Option<&mut ClassSession>;
    fn find_by_id(&self, id: &str) -> Option<&ClassSession>;
}

/// Keeps sessions in memory for the lifetime of the process, keyed by session code.
#[derive(Debug, Default)]
pub struct InMemorySessions {
    sessions: HashMap<String, ClassSession>,
}

impl InMemorySessions {
    pub fn new(sessions: Vec<ClassSession>) -> Self {
        InMemorySessions {
            sessions: sessions.into_iter().map(|session| (session.session_code.clone(), session)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionDirectory for InMemorySessions {
    fn find_by_code(&self, code: &str) -> Option<&ClassSession> {
        self.sessions.get(code)
    }

    fn find_by_code_mut(&mut self, code: &str) -> Option<&mut ClassSession> {
        self.sessions.get_mut(code)
    }

    fn find_by_id(&self, id: &str) -> Option<&ClassSession> {
        self.sessions.values().find(|session| session.id == id)
    }
}
