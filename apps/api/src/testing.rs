//! In-memory collaborators for handler and router tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::Config;
use crate::curriculum::storage::ObjectStore;
use crate::errors::AppError;
use crate::knowledge::{KnowledgeBase, PageCache};
use crate::llm_client::{Completer, CompletionRequest, LlmError};
use crate::models::attendance::AttendanceDayLog;
use crate::models::curriculum::CurriculumItem;
use crate::models::score::TestScore;
use crate::models::student::Student;
use crate::models::volunteer::Volunteer;
use crate::state::AppState;
use crate::store::RecordStore;

#[derive(Default)]
struct Records {
    students: Vec<Student>,
    attendance: Vec<AttendanceDayLog>,
    scores: Vec<TestScore>,
    volunteers: Vec<Volunteer>,
    curriculum: Vec<CurriculumItem>,
}

#[derive(Default)]
pub struct MemoryRecordStore {
    records: Mutex<Records>,
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn insert_student(&self, student: &Student) -> Result<(), AppError> {
        self.records.lock().unwrap().students.push(student.clone());
        Ok(())
    }

    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        let mut students = self.records.lock().unwrap().students.clone();
        students.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(students)
    }

    async fn get_student(&self, id: Uuid) -> Result<Option<Student>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records.students.iter().find(|s| s.id == id).cloned())
    }

    async fn insert_attendance_log(&self, log: &AttendanceDayLog) -> Result<(), AppError> {
        self.records.lock().unwrap().attendance.push(log.clone());
        Ok(())
    }

    async fn attendance_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<AttendanceDayLog>, AppError> {
        let mut logs: Vec<_> = self
            .records
            .lock()
            .unwrap()
            .attendance
            .iter()
            .filter(|log| log.date >= cutoff)
            .cloned()
            .collect();
        logs.sort_by_key(|log| log.date);
        Ok(logs)
    }

    async fn insert_score(&self, score: &TestScore) -> Result<(), AppError> {
        self.records.lock().unwrap().scores.push(score.clone());
        Ok(())
    }

    async fn list_scores(&self) -> Result<Vec<TestScore>, AppError> {
        let mut scores = self.records.lock().unwrap().scores.clone();
        scores.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(scores)
    }

    async fn scores_for_student(&self, student_id: Uuid) -> Result<Vec<TestScore>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .scores
            .iter()
            .filter(|s| s.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn insert_volunteer(&self, volunteer: &Volunteer) -> Result<(), AppError> {
        self.records.lock().unwrap().volunteers.push(volunteer.clone());
        Ok(())
    }

    async fn list_volunteers(&self) -> Result<Vec<Volunteer>, AppError> {
        Ok(self.records.lock().unwrap().volunteers.clone())
    }

    async fn insert_curriculum(&self, item: &CurriculumItem) -> Result<(), AppError> {
        self.records.lock().unwrap().curriculum.push(item.clone());
        Ok(())
    }

    async fn list_curriculum(&self) -> Result<Vec<CurriculumItem>, AppError> {
        let mut items = self.records.lock().unwrap().curriculum.clone();
        items.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(items)
    }

    async fn get_curriculum(&self, id: Uuid) -> Result<Option<CurriculumItem>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records.curriculum.iter().find(|c| c.id == id).cloned())
    }
}

#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<String, (Bytes, String)>>,
}

impl MemoryObjectStore {
    pub fn content_type(&self, key: &str) -> Option<String> {
        self.objects.lock().unwrap().get(key).map(|(_, ct)| ct.clone())
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), AppError> {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), (body, content_type.to_string()));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Bytes, AppError> {
        self.objects
            .lock()
            .unwrap()
            .get(key)
            .map(|(body, _)| body.clone())
            .ok_or_else(|| AppError::Storage(format!("no object at {key}")))
    }
}

/// Answers every call with a canned reply (or an API error) and records
/// each request it received.
pub struct StubCompleter {
    reply: Option<String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubCompleter {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Text of every turn of the most recent request, joined.
    pub fn last_prompt(&self) -> Option<String> {
        self.requests.lock().unwrap().last().map(|request| {
            request
                .turns
                .iter()
                .map(|turn| turn.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}

#[async_trait]
impl Completer for StubCompleter {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(LlmError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            }),
        }
    }

    fn model(&self) -> &str {
        "stub-model"
    }
}

pub struct TestHarness {
    pub state: AppState,
    pub store: Arc<MemoryRecordStore>,
    pub objects: Arc<MemoryObjectStore>,
    pub llm: Arc<StubCompleter>,
}

pub fn harness(llm: StubCompleter) -> TestHarness {
    harness_with_config(llm, Config::for_tests())
}

pub fn harness_with_config(llm: StubCompleter, config: Config) -> TestHarness {
    let store = Arc::new(MemoryRecordStore::default());
    let objects = Arc::new(MemoryObjectStore::default());
    let llm = Arc::new(llm);

    let knowledge = KnowledgeBase::new(
        config.knowledge_url.clone(),
        config.knowledge_base_path.clone(),
        Duration::from_secs(config.knowledge_fetch_timeout_secs),
        PageCache::disabled(),
    )
    .unwrap();

    let state = AppState {
        store: store.clone(),
        objects: objects.clone(),
        llm: llm.clone(),
        knowledge,
        config,
    };

    TestHarness {
        state,
        store,
        objects,
        llm,
    }
}

pub fn student(name: &str) -> Student {
    Student {
        id: Uuid::new_v4(),
        name: name.to_string(),
        age: 10,
        class_label: "5".to_string(),
        created_at: Utc::now(),
    }
}

pub fn score(student_id: Uuid, subject: &str, value: f64, date: DateTime<Utc>) -> TestScore {
    TestScore {
        id: Uuid::new_v4(),
        student_id,
        subject: subject.to_string(),
        score: value,
        date,
    }
}
