use stackmeans::{Error, Params, Pipeline, Report};

const THREE_QUESTIONS: &str = "\
1,1,,,0,Java
1,2,,,3,Java
1,3,,,1,Python
2,11,,1,10
2,12,,2,20
2,13,,3,5
";

fn java_python() -> Params {
    Params::new()
        .with_languages(["Java", "Python"])
        .with_spread(50_000)
        .with_kernels(2)
        .with_max_iterations(1)
}

#[test]
fn end_to_end_two_languages() {
    let summaries = Pipeline::new(java_python())
        .run_reader(THREE_QUESTIONS.as_bytes())
        .unwrap();

    assert_eq!(summaries.len(), 2);

    let python = &summaries[0];
    assert_eq!(python.dominant_language, "Python");
    assert_eq!(python.dominant_language_percent, 100.0);
    assert_eq!(python.size, 1);
    assert_eq!(python.median_score, 5);

    let java = &summaries[1];
    assert_eq!(java.dominant_language, "Java");
    assert_eq!(java.dominant_language_percent, 100.0);
    assert_eq!(java.size, 2);
    assert_eq!(java.median_score, 15);
}

#[test]
fn end_to_end_report_text() {
    let summaries = Pipeline::new(java_python())
        .run_reader(THREE_QUESTIONS.as_bytes())
        .unwrap();
    let text = Report(&summaries).to_string();
    let rows: Vec<&str> = text.lines().skip(3).collect();
    assert_eq!(
        rows,
        vec![
            "      5  Python            (100.0%)            1",
            "     15  Java              (100.0%)            2",
        ]
    );
}

#[test]
fn best_answer_wins() {
    let input = "\
1,5,,,0,Java
2,6,,5,3
2,7,,5,7
2,8,,5,2
";
    let pipeline = Pipeline::new(
        Params::new()
            .with_languages(["Java"])
            .with_kernels(1),
    );
    let summaries = pipeline.run_reader(input.as_bytes()).unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].median_score, 7);
    assert_eq!(summaries[0].size, 1);
}

#[test]
fn malformed_line_aborts() {
    let input = "1,1,,,0,Java\n2,2,,1\n";
    let err = Pipeline::new(java_python())
        .run_reader(input.as_bytes())
        .unwrap_err();
    assert!(matches!(err, Error::MalformedRecord { line: 2, .. }));
}

#[test]
fn oversized_spread_is_rejected() {
    let err = Pipeline::new(Params::new().with_spread(i32::MAX))
        .run_reader("1,1,,,0,PHP\n2,2,,1,4\n".as_bytes())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { name: "spread", .. }));
}

#[test]
fn missing_language_is_a_shortfall() {
    let input = "1,1,,,0,Java\n2,2,,1,4\n";
    let err = Pipeline::new(java_python())
        .run_reader(input.as_bytes())
        .unwrap_err();
    assert!(matches!(
        err,
        Error::SamplingShortfall {
            language: 1,
            found: 0,
            required: 1
        }
    ));
}

#[test]
fn default_languages_full_run() {
    // Ten answered questions per default language, scores spread 0..100.
    let params = Params::default();
    let mut lines = Vec::new();
    let mut id = 1;
    for lang in &params.languages {
        for i in 0..10 {
            let q = id;
            lines.push(format!("1,{q},,,0,{lang}"));
            lines.push(format!("2,{},,{q},{}", q + 1, i * 10));
            id += 2;
        }
    }
    let input = lines.join("\n");

    let summaries = Pipeline::new(params.clone())
        .run_reader(input.as_bytes())
        .unwrap();

    let total: usize = summaries.iter().map(|s| s.size).sum();
    assert_eq!(total, 150);
    assert!(summaries.len() <= params.kernels);
    for pair in summaries.windows(2) {
        assert!(pair[0].median_score <= pair[1].median_score);
    }
    for s in &summaries {
        assert!(params.languages.contains(&s.dominant_language));
        assert_eq!(s.dominant_language_percent, 100.0);
    }
}
