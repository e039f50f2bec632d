//! Properties that must hold for every input text.

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordsmith::analysis::extract_words;
use wordsmith::error::Result;
use wordsmith::prelude::*;

const TEXTS: &[&str] = &[
    "Anna swims quickly, Otto laughs loudly.",
    "En röd ros. En blå ros. En ROS.",
    "Åsa älskar åska, och åskan älskar Åsa.",
    "Ame\u{0301}lie och Zoë: déjà vu!",
    "well-known facts, 42 times over",
    "Привет мир! Как дела?",
    "家族 👨\u{200d}👩\u{200d}👧 🇸🇪 flag",
    "  leading and trailing  ",
    "rad1\nrad2\r\nrad3",
];

fn sorted(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}

#[test]
fn test_missing_word_is_never_found() -> Result<()> {
    for text in TEXTS {
        let searcher = TextSearcher::new(text)?;
        for case_sensitive in [true, false] {
            assert!(!searcher.exists("zebrafink", case_sensitive)?);
            assert!(searcher.find_all("zebrafink", case_sensitive)?.is_empty());
        }
    }
    Ok(())
}

#[test]
fn test_search_consistency() -> Result<()> {
    for text in TEXTS {
        let searcher = TextSearcher::new(text)?;
        for needle in ["a", "ros", "Å", "ll"] {
            for case_sensitive in [true, false] {
                let positions = searcher.find_all(needle, case_sensitive)?;
                assert_eq!(searcher.count(needle, case_sensitive)?, positions.len());
                assert_eq!(
                    searcher.exists(needle, case_sensitive)?,
                    searcher.find_first(needle, case_sensitive)?.is_some()
                );
                assert_eq!(
                    searcher.find_first(needle, case_sensitive)?,
                    positions.first().copied()
                );
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
    Ok(())
}

#[test]
fn test_reverse_round_trip() -> Result<()> {
    for text in TEXTS {
        let reverser = TextReverser::new(text)?;
        let reversed = reverser.reverse();
        assert_eq!(TextReverser::new(&reversed)?.reverse(), reverser.text());
    }
    Ok(())
}

#[test]
fn test_reverse_lines_round_trip() -> Result<()> {
    for text in TEXTS {
        let reverser = TextReverser::new(text)?;
        let reversed = reverser.reverse_lines();
        assert_eq!(reversed.lines().count(), reverser.text().lines().count());
        assert_eq!(TextReverser::new(&reversed)?.reverse_lines(), reverser.text());
    }
    Ok(())
}

#[test]
fn test_word_count_matches_extractor() -> Result<()> {
    for text in TEXTS {
        let analyzer = TextAnalyzer::new(text)?;
        assert_eq!(analyzer.count_words(), extract_words(analyzer.text()).len());
    }
    Ok(())
}

#[test]
fn test_removed_words_are_gone() -> Result<()> {
    for text in TEXTS {
        let transformer = TextTransformer::new(text)?;
        let targets: Vec<String> = transformer.words().into_iter().take(2).collect();
        if targets.is_empty() {
            continue;
        }

        let removed = transformer.remove_words(&targets, false)?;
        let remaining: Vec<String> = extract_words(&removed)
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        for target in &targets {
            assert!(
                !remaining.contains(&target.to_lowercase()),
                "{target:?} survived in {removed:?}"
            );
        }
    }
    Ok(())
}

#[test]
fn test_formatting_idempotence() -> Result<()> {
    for text in TEXTS {
        let formatter = TextFormatter::new(text)?;

        let lower = formatter.to_lower_case();
        if let Ok(again) = TextFormatter::new(&lower) {
            assert_eq!(again.to_lower_case(), lower);
        }

        let trimmed = formatter.trim_whitespace();
        assert_eq!(TextFormatter::new(&trimmed)?.trim_whitespace(), trimmed);
    }
    Ok(())
}

#[test]
fn test_sort_is_idempotent_permutation() -> Result<()> {
    for text in TEXTS {
        let transformer = TextTransformer::new(text)?;
        let result = transformer.sort_words(false);
        assert_eq!(sorted(extract_words(&result)), sorted(transformer.words()));

        if !result.is_empty() {
            assert_eq!(TextTransformer::new(&result)?.sort_words(false), result);
        }
    }
    Ok(())
}

#[test]
fn test_shuffle_is_permutation() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(2024);
    for text in TEXTS {
        let transformer = TextTransformer::new(text)?;
        let shuffled = transformer.shuffle_words_with(&mut rng);
        assert_eq!(sorted(extract_words(&shuffled)), sorted(transformer.words()));
    }
    Ok(())
}

#[test]
fn test_construction_boundaries() {
    let config = ProcessorConfig::new().with_max_text_length(8);
    for blank in ["", " ", "\n\t  "] {
        assert_eq!(TextAnalyzer::new(blank).unwrap_err().kind(), ErrorKind::EmptyValue);
        assert_eq!(TextFormatter::new(blank).unwrap_err().kind(), ErrorKind::EmptyValue);
        assert_eq!(TextSearcher::new(blank).unwrap_err().kind(), ErrorKind::EmptyValue);
        assert_eq!(TextTransformer::new(blank).unwrap_err().kind(), ErrorKind::EmptyValue);
        assert_eq!(TextReverser::new(blank).unwrap_err().kind(), ErrorKind::EmptyValue);
    }

    let long = "ninechars";
    assert_eq!(
        TextAnalyzer::with_config(long, &config).unwrap_err().kind(),
        ErrorKind::TooLong
    );
    assert_eq!(
        TextFormatter::with_config(long, &config).unwrap_err().kind(),
        ErrorKind::TooLong
    );
    assert_eq!(
        TextSearcher::with_config(long, &config).unwrap_err().kind(),
        ErrorKind::TooLong
    );
    assert_eq!(
        TextTransformer::with_config(long, &config).unwrap_err().kind(),
        ErrorKind::TooLong
    );
    assert_eq!(
        TextReverser::with_config(long, &config).unwrap_err().kind(),
        ErrorKind::TooLong
    );

    // Length is counted in characters, not bytes.
    assert!(TextAnalyzer::with_config("åäöåäöåä", &config).is_ok());
}
