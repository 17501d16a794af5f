//! Ingest Integration Tests
//!
//! ユースケースを通した取り込みのテスト（Blob Storageはインメモリ）

use async_trait::async_trait;
use blobingest::adapter::repositories::source_content_repository::SourceContentRepository;
use blobingest::application::dto::ingest_config::IngestConfig;
use blobingest::application::use_cases::ingest_batch::IngestBatchUseCase;
use blobingest::application::use_cases::upload_source::UploadSourceUseCase;
use blobingest::domain::repositories::blob_repository::{BlobRepository, BlobUpload, StorageError};
use blobingest::domain::repositories::content_repository::{
    ContentRepository, SourceContent, SourceError,
};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// `{container}/{blob}` をキーに保持するインメモリBlobストア
#[derive(Default)]
struct InMemoryBlobRepository {
    blobs: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryBlobRepository {
    fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        self.blobs.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobRepository for InMemoryBlobRepository {
    async fn put_blob(&self, upload: &BlobUpload) -> Result<(), StorageError> {
        self.blobs.lock().unwrap().insert(
            format!("{}/{}", upload.container, upload.blob_name),
            upload.content.to_vec(),
        );
        Ok(())
    }
}

/// ローカルファイルは実際に読み、リモートは登録済みの応答を返す
struct StubContentRepository {
    local: SourceContentRepository,
    remote: HashMap<String, SourceContent>,
    requested: Mutex<Vec<String>>,
}

impl StubContentRepository {
    fn new(remote: Vec<(&str, SourceContent)>) -> Self {
        Self {
            local: SourceContentRepository::default(),
            remote: remote
                .into_iter()
                .map(|(url, content)| (url.to_string(), content))
                .collect(),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentRepository for StubContentRepository {
    async fn read_local(&self, path: &Path) -> Result<SourceContent, SourceError> {
        self.local.read_local(path).await
    }

    async fn fetch_remote(&self, url: &str) -> Result<SourceContent, SourceError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.remote
            .get(url)
            .cloned()
            .ok_or_else(|| SourceError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

fn use_case(
    content: Arc<StubContentRepository>,
    blobs: Arc<InMemoryBlobRepository>,
) -> IngestBatchUseCase<StubContentRepository, InMemoryBlobRepository> {
    IngestBatchUseCase::new(UploadSourceUseCase::new(content, blobs))
}

#[tokio::test]
async fn test_local_and_github_sources_into_docs() {
    let temp_dir = TempDir::new().unwrap();
    let notes = temp_dir.path().join("notes.txt");
    fs::write(&notes, "meeting notes\n").unwrap();

    let content = Arc::new(StubContentRepository::new(vec![(
        "https://raw.githubusercontent.com/org/repo/main/readme.md",
        SourceContent::new("# readme\n", Some("text/plain; charset=utf-8".to_string())),
    )]));
    let blobs = Arc::new(InMemoryBlobRepository::default());

    let input_paths = format!(
        "{},https://github.com/org/repo/blob/main/readme.md",
        notes.display()
    );
    let config = IngestConfig::new("account".to_string(), "docs".to_string(), &input_paths);

    let report = use_case(content.clone(), blobs.clone())
        .execute(&config.container_name, &config.items)
        .await;

    assert_eq!(report.uploaded_count(), 2);
    assert_eq!(
        content.requested(),
        vec!["https://raw.githubusercontent.com/org/repo/main/readme.md"]
    );

    let stored = blobs.snapshot();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored["docs/notes.txt"], b"meeting notes\n");
    assert_eq!(stored["docs/readme.md"], b"# readme\n");
}

#[tokio::test]
async fn test_local_file_of_n_bytes_becomes_blob_of_n_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("payload.bin");
    let data: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
    fs::write(&path, &data).unwrap();

    let content = Arc::new(StubContentRepository::new(vec![]));
    let blobs = Arc::new(InMemoryBlobRepository::default());

    let config = IngestConfig::new(
        "account".to_string(),
        "raw".to_string(),
        &path.display().to_string(),
    );
    let report = use_case(content, blobs.clone())
        .execute(&config.container_name, &config.items)
        .await;

    assert_eq!(report.uploaded_count(), 1);
    let stored = blobs.snapshot();
    assert_eq!(stored["raw/payload.bin"].len(), 4096);
    assert_eq!(stored["raw/payload.bin"], data);
}

#[tokio::test]
async fn test_invalid_source_does_not_stop_valid_ones() {
    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.path().join("a.txt");
    let c = temp_dir.path().join("c.txt");
    fs::write(&a, "a").unwrap();
    fs::write(&c, "c").unwrap();
    let missing = temp_dir.path().join("missing.txt");

    let content = Arc::new(StubContentRepository::new(vec![]));
    let blobs = Arc::new(InMemoryBlobRepository::default());

    let input_paths = format!("{},{},{}", a.display(), missing.display(), c.display());
    let config = IngestConfig::new("account".to_string(), "docs".to_string(), &input_paths);

    let report = use_case(content, blobs.clone())
        .execute(&config.container_name, &config.items)
        .await;

    assert_eq!(report.uploaded_count(), 2);
    assert_eq!(report.failed_count(), 1);
    assert!(report.outcomes()[1].is_failed());

    let stored = blobs.snapshot();
    assert_eq!(
        stored.keys().collect::<Vec<_>>(),
        vec!["docs/a.txt", "docs/c.txt"]
    );
}

#[tokio::test]
async fn test_html_and_empty_responses_leave_store_untouched() {
    let content = Arc::new(StubContentRepository::new(vec![
        (
            "https://example.com/login",
            SourceContent::new("<html></html>", Some("text/html".to_string())),
        ),
        (
            "https://example.com/empty.txt",
            SourceContent::new(Vec::new(), Some("text/plain".to_string())),
        ),
    ]));
    let blobs = Arc::new(InMemoryBlobRepository::default());

    let config = IngestConfig::new(
        "account".to_string(),
        "docs".to_string(),
        "https://example.com/login,https://example.com/empty.txt",
    );
    let report = use_case(content, blobs.clone())
        .execute(&config.container_name, &config.items)
        .await;

    assert_eq!(report.skipped_count(), 2);
    assert_eq!(report.failed_count(), 0);
    assert!(blobs.snapshot().is_empty());
}

#[tokio::test]
async fn test_rerun_overwrites_instead_of_duplicating() {
    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.path().join("a.txt");
    let b = temp_dir.path().join("b.txt");
    fs::write(&a, "first a").unwrap();
    fs::write(&b, "first b").unwrap();

    let content = Arc::new(StubContentRepository::new(vec![]));
    let blobs = Arc::new(InMemoryBlobRepository::default());
    let batch = use_case(content, blobs.clone());

    let input_paths = format!("{},{}", a.display(), b.display());
    let config = IngestConfig::new("account".to_string(), "docs".to_string(), &input_paths);

    batch.execute(&config.container_name, &config.items).await;
    let first = blobs.snapshot();

    batch.execute(&config.container_name, &config.items).await;
    assert_eq!(blobs.snapshot(), first);

    fs::write(&a, "second a").unwrap();
    batch.execute(&config.container_name, &config.items).await;

    let stored = blobs.snapshot();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored["docs/a.txt"], b"second a");
}
