use chrono::{DateTime, Utc};

/// One named document attachment found while scanning a chat's history.
#[derive(Clone, Debug)]
pub struct FileRecord {
    pub message_id: i32,
    pub name: String,
    pub date: DateTime<Utc>,
    pub size: i64,
}

/// Result of a full history scan, newest message first.
#[derive(Clone, Debug, Default)]
pub struct ScanSummary {
    pub files: Vec<FileRecord>,
    pub total_bytes: i64,
}

impl ScanSummary {
    pub fn push(&mut self, record: FileRecord) {
        self.total_bytes += record.size;
        self.files.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Ids of every scanned file, in scan order.
    pub fn ids(&self) -> Vec<i32> {
        self.files.iter().map(|f| f.message_id).collect()
    }
}
