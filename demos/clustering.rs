//! Cluster a handful of in-memory postings and print the report.

use stackmeans::{read_postings, Params, Pipeline, Report};

fn main() {
    // Two questions per language, each with a couple of answers.
    let input = "\
1,1,,,0,Java
2,101,,1,12
2,102,,1,3
1,2,,,0,Java
2,103,,2,40
1,3,,,0,Python
2,104,,3,7
1,4,,,0,Python
2,105,,4,2
2,106,,4,9
1,5,,,0,Scala
2,107,,5,1
1,6,,,0,Scala
2,108,,6,25
1,7,,,0,COBOL
2,109,,7,99
";

    let postings = read_postings(input.as_bytes()).unwrap();
    let params = Params::new()
        .with_languages(["Java", "Python", "Scala"])
        .with_kernels(3);

    let pipeline = Pipeline::new(params);
    let vectors = pipeline.vectors(&postings);
    println!("=== Vectors ({}) ===", vectors.len());
    for v in &vectors {
        println!("  ({:6}, {:3})", v.x, v.y);
    }

    let summaries = pipeline.run(&postings).unwrap();
    println!();
    print!("{}", Report(&summaries));
}
