//! End-to-end tests: texts to index file to ranking to evaluation.

use bm25_retrieval::{
    build_vocabulary, calculate_bm25, calculate_idf, calculate_spearman, load_index,
    rank_documents, ranking_ids, remove_stopwords, save_index, tokenize, truncate_ranking,
    Bm25Params, Corpus, ScoringMethod, DEFAULT_STOPWORDS,
};
use tempfile::TempDir;

const TEXTS: &[&str] = &[
    "The quick brown fox jumps over the lazy dog.",
    "A lazy cat sleeps all day in the sun.",
    "Foxes are quick and clever animals; the fox hunts at night.",
    "Dogs and cats are popular pets in many homes.",
    "Stock markets fell sharply on Monday.",
];

fn corpus() -> Corpus {
    Corpus::from_texts(TEXTS, DEFAULT_STOPWORDS).expect("corpus")
}

#[test]
fn manual_pipeline_matches_corpus_index() {
    let documents: Vec<Vec<String>> = TEXTS
        .iter()
        .map(|text| remove_stopwords(&tokenize(text), DEFAULT_STOPWORDS).expect("filtered"))
        .collect();
    let vocab = build_vocabulary(&documents).expect("vocab");
    let idf = calculate_idf(&vocab, &documents).expect("idf");
    let avg_len =
        documents.iter().map(Vec::len).sum::<usize>() as f64 / documents.len() as f64;

    let corpus = corpus();
    let index = corpus.build_index(ScoringMethod::Bm25, Bm25Params::default()).expect("index");

    for (doc, scores) in documents.iter().zip(&index) {
        let manual = calculate_bm25(&vocab, doc, &idf, Bm25Params::default(), avg_len, doc.len())
            .expect("bm25");
        assert_eq!(&manual, scores);
    }
}

#[test]
fn fox_query_ranks_fox_documents_first() {
    let ranking = corpus()
        .search("quick fox", ScoringMethod::Bm25, Bm25Params::default(), DEFAULT_STOPWORDS)
        .expect("ranking");

    let ids = ranking_ids(&ranking);
    assert_eq!(ids.len(), TEXTS.len());
    assert!(ids[..2].contains(&0));
    assert!(ids[..2].contains(&2));
    assert_eq!(ranking.last().map(|(_, s)| *s), Some(0.0));
}

#[test]
fn saved_index_ranks_like_fresh_index() {
    let corpus = corpus();
    let index = corpus.build_index(ScoringMethod::TfIdf, Bm25Params::default()).expect("index");

    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("tf_idf.json");
    assert!(save_index(&index, &path).expect("save"));
    let loaded = load_index(&path).expect("load");

    assert_eq!(loaded.len(), index.len());
    for (fresh, restored) in index.iter().zip(&loaded) {
        assert_eq!(fresh.keys().collect::<Vec<_>>(), restored.keys().collect::<Vec<_>>());
        for (term, score) in fresh {
            assert!((score - restored[term]).abs() < 1e-12, "score drift for {term}");
        }
    }

    let fresh_ids = ranking_ids(&rank_documents(&index, "lazy dog", DEFAULT_STOPWORDS).unwrap());
    let loaded_ids = ranking_ids(&rank_documents(&loaded, "lazy dog", DEFAULT_STOPWORDS).unwrap());
    assert_eq!(fresh_ids, loaded_ids);
}

#[test]
fn cutoff_index_drops_common_terms() {
    let corpus = corpus();
    let alpha = 0.0;
    let index = corpus
        .build_index(ScoringMethod::Bm25Cutoff { alpha }, Bm25Params::default())
        .expect("cutoff index");

    for scores in index.iter().filter(|s| !s.is_empty()) {
        for term in scores.keys() {
            assert!(corpus.idf()[term] > alpha, "{term} should have been cut");
        }
        let kept = corpus.idf().values().filter(|idf| **idf > alpha).count();
        assert_eq!(scores.len(), kept);
    }
}

#[test]
fn evaluation_against_golden_ranking() {
    let ranking = corpus()
        .search("lazy cat", ScoringMethod::Bm25, Bm25Params::default(), DEFAULT_STOPWORDS)
        .expect("ranking");
    let top = truncate_ranking(ranking, Some(3));
    let ids = ranking_ids(&top);
    assert_eq!(ids[0], 1);

    let rho = calculate_spearman(&ids, &ids).expect("spearman");
    assert_eq!(rho, 1.0);

    let mut reversed = ids.clone();
    reversed.reverse();
    assert_eq!(calculate_spearman(&reversed, &ids).expect("spearman"), -1.0);
}
