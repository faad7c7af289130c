// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for SCALEDRILL
//!
//! These tests verify that scale construction, keyboard mapping, grading,
//! and drill sessions work together through the public API.

use std::collections::HashSet;
use std::fs;

use scaledrill::config::validate_config;
use scaledrill::keyboard::{render_keyboard, RenderOptions};
use scaledrill::music::{random_scale_with, KeySignature};
use scaledrill::{
    expected_keys, grade, DrillConfig, DrillError, DrillSession, KeyIdentity, KeyboardLayout,
    Mode, NoteNaming, PitchClass, Scale, Spelling,
};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn white(index: u8) -> KeyIdentity {
    KeyIdentity::White { index }
}

fn black(pitch_class: PitchClass, octave: u8) -> KeyIdentity {
    KeyIdentity::Black {
        pitch_class,
        octave,
    }
}

/// C major occupies the first eight white keys and nothing else
#[test]
fn test_c_major_scenario() {
    let scale = Scale::build(PitchClass::C, Mode::Major).unwrap();
    let names: Vec<String> = scale.degrees().iter().map(|n| n.to_string()).collect();
    assert_eq!(names, ["C", "D", "E", "F", "G", "A", "B", "C"]);

    let expected = expected_keys(&scale).unwrap();
    assert_eq!(expected, (0..8).map(white).collect::<HashSet<_>>());
}

/// F major spells its fourth degree Bb and uses that black key
#[test]
fn test_f_major_scenario() {
    let scale = Scale::build(PitchClass::F, Mode::Major).unwrap();
    let fourth = scale.degrees()[3];
    assert_eq!(fourth.to_string(), "Bb");
    assert_eq!(fourth.spelling(), Spelling::Flat);

    let expected = expected_keys(&scale).unwrap();
    assert!(expected.contains(&black(PitchClass::As, 1)));
    assert_eq!(expected.iter().filter(|k| k.is_black()).count(), 1);
}

/// C minor uses three flat-spelled black keys
#[test]
fn test_c_minor_scenario() {
    let scale = Scale::build(PitchClass::C, Mode::NaturalMinor).unwrap();
    let names: Vec<String> = scale.degrees().iter().map(|n| n.to_string()).collect();
    assert_eq!(names, ["C", "D", "Eb", "F", "G", "Ab", "Bb", "C"]);

    let expected = expected_keys(&scale).unwrap();
    let blacks: Vec<_> = expected.iter().filter(|k| k.is_black()).collect();
    assert_eq!(blacks.len(), 3);
    for key in blacks {
        let pc = KeyboardLayout::standard().pitch_class(*key).unwrap();
        assert_eq!(scale.spelling_of(pc).unwrap().spelling(), Spelling::Flat);
    }
}

/// Every key signature's accidentals appear in its scale with that spelling
#[test]
fn test_signature_spellings_match_scales() {
    for sig in KeySignature::all() {
        let scale = Scale::build(sig.tonic(), sig.mode()).unwrap();
        for accidental in sig.accidentals() {
            assert_eq!(scale.spelling_of(accidental.pitch_class()), Some(accidental));
        }
        let chromatic = scale.notes().iter().filter(|n| !n.pitch_class().is_natural()).count();
        assert_eq!(chromatic, sig.sharps() + sig.flats());
    }
}

/// Expected keys are always eight distinct, strictly ascending keys
#[test]
fn test_expected_keys_for_random_scales() {
    let layout = KeyboardLayout::standard();
    let mut rng = StdRng::seed_from_u64(2026);

    for _ in 0..200 {
        let scale = random_scale_with(&mut rng).unwrap();
        let keys = layout.scale_keys(&scale).unwrap();
        assert_eq!(keys.len(), 8);
        assert_eq!(expected_keys(&scale).unwrap().len(), 8);

        let semitones: Vec<u8> = keys.iter().map(|&k| layout.semitone(k).unwrap()).collect();
        assert!(semitones.windows(2).all(|w| w[0] < w[1]), "{}", scale);
    }
}

/// Grading requires the exact set of expected keys
#[test]
fn test_exact_match_grading() {
    for root in PitchClass::NATURALS {
        for mode in Mode::ALL {
            let scale = Scale::build(root, mode).unwrap();
            let expected = expected_keys(&scale).unwrap();
            assert!(grade(&scale, &expected).unwrap());
            assert_eq!(grade(&scale, &expected), grade(&scale, &expected));

            let extra = KeyboardLayout::standard()
                .keys()
                .into_iter()
                .find(|k| !expected.contains(k))
                .unwrap();
            let mut superset = expected.clone();
            superset.insert(extra);
            assert!(!grade(&scale, &superset).unwrap());

            let mut subset = expected.clone();
            let first = *subset.iter().next().unwrap();
            subset.remove(&first);
            assert!(!grade(&scale, &subset).unwrap());
        }
    }
}

/// Enharmonic spelling does not matter for grading; the key does
#[test]
fn test_grading_ignores_spelling_but_not_octave() {
    let scale = Scale::build(PitchClass::F, Mode::Major).unwrap();
    let mut selected = expected_keys(&scale).unwrap();

    // Same key typed with the sharp name
    let typed: KeyIdentity = "black-1-A#".parse().unwrap();
    assert!(selected.contains(&typed));

    // Same pitch class one octave up is a different key
    selected.remove(&typed);
    selected.insert(black(PitchClass::As, 2));
    assert!(!grade(&scale, &selected).unwrap());
}

/// A full round through the session API
#[test]
fn test_session_round_trip() {
    let config = DrillConfig {
        seed: Some(99),
        ..DrillConfig::default()
    };
    let mut session = DrillSession::new(&config).unwrap();

    let keys = KeyboardLayout::standard().scale_keys(session.scale()).unwrap();
    for key in keys {
        session.toggle(key).unwrap();
    }
    assert!(session.check().unwrap().is_correct());
    assert_eq!(
        session.toggle(white(0)).unwrap_err(),
        DrillError::RoundChecked
    );

    session.new_scale().unwrap();
    assert!(session.selection().is_empty());
    assert!(!session.check().unwrap().is_correct());

    let tally = session.tally();
    assert_eq!(tally.rounds, 2);
    assert_eq!(tally.correct, 1);
}

/// Notes typed by name map onto the same keys the grader expects
#[test]
fn test_typed_notes_answer_a_scale() {
    let scale = Scale::build(PitchClass::E, Mode::Major).unwrap();
    let mut session = DrillSession::with_scale(scale);

    for text in ["E1", "F#1", "G#1", "A1", "B1", "C#2", "D#2", "E2"] {
        let key: KeyIdentity = text.parse().unwrap();
        session.toggle(key).unwrap();
    }
    assert!(session.check().unwrap().is_correct());
}

/// In German naming, typing the labels shown on screen answers the scale
#[test]
fn test_german_labels_answer_c_minor() {
    let scale = Scale::build(PitchClass::C, Mode::NaturalMinor).unwrap();
    let layout = KeyboardLayout::standard();
    let eb1 = black(PitchClass::Ds, 1);
    assert_eq!(layout.label(eb1, Some(&scale), NoteNaming::German), "Es");

    let mut session = DrillSession::with_scale(scale);
    for text in ["C1", "D1", "Es1", "F1", "G1", "As1", "B1", "C2"] {
        let key = KeyIdentity::parse_with(text, NoteNaming::German).unwrap();
        session.toggle(key).unwrap();
    }
    assert!(session.selection().contains(eb1));
    assert!(session.check().unwrap().is_correct());
}

/// Invalid roots are reported, never coerced
#[test]
fn test_invalid_root_is_reported() {
    for pc in PitchClass::ALL.iter().filter(|pc| !pc.is_natural()) {
        for mode in Mode::ALL {
            assert_eq!(
                Scale::build(*pc, mode).unwrap_err(),
                DrillError::InvalidRoot { root: *pc }
            );
        }
    }
}

/// Config files drive the session's choice of scales
#[test]
fn test_config_file_to_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drill.yaml");
    fs::write(
        &path,
        r#"
roots: ["D"]
modes: ["minor"]
naming: german
seed: 4
"#,
    )
    .unwrap();

    let config = validate_config(&path).unwrap();
    let mut session = DrillSession::new(&config).unwrap();
    assert_eq!(session.scale().to_string(), "D Minor");
    assert_eq!(session.new_scale().unwrap().to_string(), "D Minor");

    let text = render_keyboard(
        KeyboardLayout::standard(),
        session.scale(),
        session.selection().as_set(),
        None,
        RenderOptions {
            naming: config.naming,
            mark_root: config.mark_root,
        },
    );
    // D minor spells its black key B (German for Bb)
    assert!(text.lines().next().unwrap().contains("B "));
    assert!(text.contains("|D ^|"));
}
