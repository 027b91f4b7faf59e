use idiom_tour::core::catalog::{all_demos, DEMO_NAMES};
use idiom_tour::{build_catalog, DemoRunner, OutputFormat, TomlConfig};

const EXPECTED_TRANSCRIPT: &str = "\
[2, 4, 6, 8, 10, 12, 14]
[0, 1, 4, 9, 16, 25, 36, 49, 64, 81]
{0: 0, 1: 1, 2: 8, 3: 27, 4: 64}
[0, 2, 4, 6, 8]
{0: 0, 2: 8, 4: 64}
apple [('apple', 1), ('apple', 3)]
banana [('banana', 2), ('banana', 4)]
[0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181, 6765]
CacheInfo(hits=38, misses=21, maxsize=256, currsize=21)
{'warehouse': 'main', 'sku': '', 'price': 0.0, 'quantity': 0}
{'warehouse': 'main', 'sku': 'LAP123', 'price': 999.99, 'quantity': 10}
localhost
8080
True
localhost
6000
True
False
";

fn run_to_string(runner: &mut DemoRunner) -> String {
    let mut buffer = Vec::new();
    runner.run(&mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_default_tour_prints_full_transcript() {
    let config = TomlConfig::default();
    let mut runner = DemoRunner::new(build_catalog(&config));

    assert_eq!(run_to_string(&mut runner), EXPECTED_TRANSCRIPT);
}

#[test]
fn test_all_demos_report_outputs_in_order() {
    let mut runner = DemoRunner::new(all_demos(20, 256));
    let mut buffer = Vec::new();
    let outputs = runner.run(&mut buffer).unwrap();

    let names: Vec<&str> = outputs.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, DEMO_NAMES.to_vec());

    let total_lines: usize = outputs.iter().map(|o| o.lines.len()).sum();
    assert_eq!(total_lines, EXPECTED_TRANSCRIPT.lines().count());
}

#[test]
fn test_selected_demos_only() {
    let config =
        TomlConfig::from_toml_str("[tour]\ndemos = [\"records\", \"filter-evens\"]\n").unwrap();
    let mut runner = DemoRunner::new(build_catalog(&config));

    assert_eq!(
        run_to_string(&mut runner),
        "[2, 4, 6, 8, 10, 12, 14]\nlocalhost\n8080\nTrue\nlocalhost\n6000\nTrue\nFalse\n"
    );
}

#[test]
fn test_json_format_emits_one_object_per_demo() {
    let config = TomlConfig::from_toml_str(
        "[tour]\ndemos = [\"inventory\"]\nformat = \"json\"\n",
    )
    .unwrap();
    let format: OutputFormat = config.tour.format.parse().unwrap();
    let mut runner = DemoRunner::new(build_catalog(&config)).with_format(format);

    let text = run_to_string(&mut runner);
    let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();

    assert_eq!(value["name"], "inventory");
    assert_eq!(
        value["lines"][1],
        "{'warehouse': 'main', 'sku': 'LAP123', 'price': 999.99, 'quantity': 10}"
    );
}
