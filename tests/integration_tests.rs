//! Integration tests for the resume matcher

use resume_matcher::input::text_extractor::PdfExtractor;
use resume_matcher::input::InputManager;
use resume_matcher::processing::document::DocumentOrigin;
use resume_matcher::{analyze, tokenize, AnalysisOptions, ResumeMatcherError, SimilarityEngine};
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_empty_file_is_extraction_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty_resume.txt");
    std::fs::write(&path, "").unwrap();

    let err = InputManager::new().extract_text(&path).await.unwrap_err();
    assert!(err.is_extraction_failure());
    assert!(err.to_string().contains("no extractable text"));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    let err = result.unwrap_err();
    assert!(err.is_extraction_failure());
    assert!(err.to_string().contains("unsupported file type"));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    let err = result.unwrap_err();
    assert!(err.is_extraction_failure());
    assert!(matches!(err, ResumeMatcherError::Extraction(ref e) if e.source_label.contains("nonexistent.txt")));
}

#[tokio::test]
async fn test_corrupt_pdf_is_extraction_failure() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/corrupt_resume.pdf");

    let err = manager.extract_text(path).await.unwrap_err();
    assert!(err.is_extraction_failure());
    assert!(err.to_string().contains("corrupt_resume.pdf"));
}

#[tokio::test]
async fn test_end_to_end_from_files() {
    let manager = InputManager::new();
    let resume = manager
        .load_document(Path::new("tests/fixtures/sample_resume.txt"), DocumentOrigin::Resume)
        .await
        .unwrap();
    let job = manager
        .load_document(Path::new("tests/fixtures/sample_job.txt"), DocumentOrigin::JobDescription)
        .await
        .unwrap();

    let engine = SimilarityEngine::new(AnalysisOptions::default()).unwrap();
    let result = engine.analyze_documents(&resume, &job).unwrap();

    assert!(result.match_score > 0.0 && result.match_score < 100.0);
    assert!(result.missing_keywords.len() <= 10);
    assert!(!result.missing_keywords.contains(&"react".to_string()));

    let expected = tokenize(job.content());
    let resume_tokens = tokenize(resume.content());
    for keyword in &result.missing_keywords {
        assert!(expected.contains(keyword));
        assert!(!resume_tokens.contains(keyword));
    }
}

#[test]
fn test_pdf_extraction_failure_is_not_a_score() {
    let engine = SimilarityEngine::new(AnalysisOptions::default()).unwrap();
    let result = engine.analyze_pdf(&PdfExtractor, b"not a pdf at all", "Rust developer");

    match result {
        Err(err) => assert!(err.is_extraction_failure()),
        Ok(result) => panic!("expected extraction failure, got score {}", result.match_score),
    }
}

#[test]
fn test_score_range_over_assorted_inputs() {
    let samples = [
        "",
        "   ",
        "12345 !!! ???",
        "Rust",
        "Rust rust RUST tokio",
        "the and of with",
        "Python developer with machine learning experience",
        "Looking for a Python developer with deep learning and SQL skills",
    ];
    let options = AnalysisOptions::default();
    for resume in samples {
        for job in samples {
            let result = analyze(resume, job, &options).unwrap();
            assert!((0.0..=100.0).contains(&result.match_score), "{resume:?} vs {job:?}");
        }
    }
}
