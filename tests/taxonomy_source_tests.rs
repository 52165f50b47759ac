use std::io::Write;

use async_trait::async_trait;
use mockall::mock;

use cim_lexicon::pipeline;
use cim_lexicon::{
    Depth, JsonFileSource, LexiconError, LexiconResult, Taxonomy, TaxonomySource,
};

mock! {
    Source {}

    #[async_trait]
    impl TaxonomySource for Source {
        fn source_id(&self) -> String;
        async fn load(&self) -> LexiconResult<Taxonomy>;
    }
}

fn write_taxonomy(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write taxonomy");
    file
}

#[tokio::test]
async fn file_source_loads_and_keeps_key_order() {
    let file = write_taxonomy(r#"{"vehicles": {"air": ["jet"]}, "animals": {"wild": ["tiger"]}}"#);
    let taxonomy = JsonFileSource::new(file.path()).load().await.unwrap();
    assert_eq!(taxonomy.groups().collect::<Vec<_>>(), vec!["vehicles", "animals"]);
}

#[tokio::test]
async fn file_source_rejects_invalid_json() {
    let file = write_taxonomy("{\"animals\": ");
    let source = JsonFileSource::new(file.path());
    let err = source.load().await.unwrap_err();
    assert!(err.is_data_source());
    assert!(err.to_string().contains(&source.source_id()));
}

#[tokio::test]
async fn file_source_rejects_non_object_root() {
    let file = write_taxonomy(r#"["tiger", "lion"]"#);
    let err = JsonFileSource::new(file.path()).load().await.unwrap_err();
    assert!(err.is_data_source());
}

#[tokio::test]
async fn pipeline_reports_from_a_file() {
    let file = write_taxonomy(r#"{"animals": {"wild": ["tiger", "lion"]}, "plants": {"trees": ["oak"]}}"#);
    let source = JsonFileSource::new(file.path());
    let outcome = pipeline::run(&source, "Tiger, oak; tiger.", Depth::new(2).unwrap())
        .await
        .unwrap();
    assert_eq!(outcome.report.render_text(), "tiger = 2; oak = 1\nwild = 2; trees = 1");
}

#[tokio::test]
async fn pipeline_loads_exactly_once() {
    let mut source = MockSource::new();
    source.expect_load().times(1).returning(|| {
        Taxonomy::from_json_str("mock", r#"{"food": {"fruits": ["mango"]}}"#)
    });
    source
        .expect_source_id()
        .return_const("mock".to_string());

    let outcome = pipeline::run(&source, "mango", Depth::new(2).unwrap())
        .await
        .unwrap();
    assert_eq!(outcome.report.word_line(), "mango = 1");
    assert_eq!(outcome.report.group_line(), "fruits = 1");
}

#[tokio::test]
async fn pipeline_surfaces_load_errors() {
    let mut source = MockSource::new();
    source
        .expect_load()
        .returning(|| Err(LexiconError::data_source("mock", "unreachable store")));
    source.expect_source_id().never();

    let err = pipeline::run(&source, "mango", Depth::TOP).await.unwrap_err();
    assert_eq!(err, LexiconError::data_source("mock", "unreachable store"));
}
