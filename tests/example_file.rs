use efp::parser::Parser;
use efp::printer::{render_program, Format};
use std::fs;
use std::path::Path;

#[test]
fn test_demo_file_parses_and_prints() {
    let path = Path::new("demos/example.efp");
    let source = fs::read_to_string(path).expect("Failed to read demo file");

    let mut parser = Parser::new(&source);
    let program = parser.parse_program().expect("Parsing failed");
    assert_eq!(program.len(), 6);

    let output = render_program(&program, Format::Sexpr);
    println!("Printed program:\n{}", output);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "(func square(x: num) -> num (* x x))");
    assert_eq!(lines[1], "(func area(w: num, h: num) -> num (* w h))");
    assert_eq!(
        lines[2],
        "(func describe(n: num) -> str (match n (0 -> \"zero\") (1 -> \"one\")))"
    );
    assert_eq!(lines[3], "(- (+ (square 4) (area 2.5 3)) 1)");
    assert_eq!(lines[4], "(describe (square 1))");
    assert_eq!(lines[5], "\"done\"");
}

#[test]
fn test_demo_file_surface_form_reparses() {
    let source = fs::read_to_string("demos/example.efp").expect("Failed to read demo file");
    let program = efp::parse(&source).expect("Parsing failed");

    let printed = render_program(&program, Format::Source);
    let reparsed = efp::parse(&printed).expect("Re-parsing failed");
    assert_eq!(reparsed, program);
}
