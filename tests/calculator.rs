use padcalc::keys::parse_line;
use padcalc::{Calculator, Event, Operator};

fn press(calc: &mut Calculator, keys: &str) {
    for event in parse_line(keys).unwrap() {
        calc.handle(event);
    }
}

fn after(keys: &str) -> Calculator {
    let mut calc = Calculator::new();
    press(&mut calc, keys);
    calc
}

#[test]
fn scenarios() {
    let tests = vec![
        ("5 + 3 =", "8", vec!["5 + 3 = 8"]),
        ("9 sqrt", "3", vec!["√(9) = 3"]),
        ("4 sq", "16", vec!["(4)² = 16"]),
        ("5 / 0 =", "Infinity", vec!["5 / 0 = Infinity"]),
        ("5 neg / 0 =", "-Infinity", vec!["-5 / 0 = -Infinity"]),
        ("2 + 3 * 4 =", "20", vec!["5 * 4 = 20", "2 + 3 = 5"]),
        ("10 - 4 - 3 =", "3", vec!["6 - 3 = 3", "10 - 4 = 6"]),
        ("200 * 15 % =", "30", vec!["200 * 0.15 = 30"]),
    ];

    for (keys, display, history) in tests {
        let calc = after(keys);
        assert_eq!(calc.display(), display, "keys {:?}", keys);
        assert_eq!(calc.history_texts(), history, "keys {:?}", keys);
    }
}

#[test]
fn typed_digits_concatenate() {
    for typed in ["1", "42", "9081726354", "100200"] {
        let calc = after(typed);
        assert_eq!(calc.display(), typed);
    }
    assert_eq!(after("0000").display(), "0");
    assert_eq!(after("000123").display(), "123");
}

#[test]
fn all_clear_from_any_state_keeps_memory() {
    let prefixes = ["", "12", "12 +", "12 + 3", "12 + 3 =", "7 m+ 4 /", "1.5 neg", "9 sqrt"];
    for prefix in prefixes {
        let mut calc = after(prefix);
        calc.memory_add();
        let memory = calc.memory();
        calc.handle(Event::AllClear);
        assert_eq!(calc.display(), "0", "after {:?}", prefix);
        assert!(calc.waiting_for_operand());
        assert!(calc.pending().is_none());
        assert_eq!(calc.memory(), memory);
    }
}

#[test]
fn binary_operations_record_one_entry() {
    let operands = [(3.0, 4.0), (1.5, 0.25), (100.0, 8.0), (7.0, 7.0)];
    for (a, b) in operands {
        for operator in Operator::ALL {
            let mut calc = Calculator::new();
            press(&mut calc, &a.to_string());
            calc.operator(operator);
            press(&mut calc, &b.to_string());
            calc.equals();

            let result = operator.apply(a, b);
            assert_eq!(calc.display(), padcalc::format::format_number(result));
            assert_eq!(
                calc.history_texts(),
                vec![format!("{} {} {} = {}", a, operator, b, calc.display())]
            );
        }
    }
}

#[test]
fn backspace_edits_entry() {
    let mut calc = after("2024");
    calc.backspace();
    assert_eq!(calc.display(), "202");
    assert!(!calc.waiting_for_operand());

    let mut calc = after("8");
    calc.backspace();
    assert_eq!(calc.display(), "0");
    assert!(calc.waiting_for_operand());
    calc.digit(5);
    assert_eq!(calc.display(), "5");
}

#[test]
fn memory_survives_all_clear() {
    let mut calc = after("25 m+ ac 5 m-");
    calc.all_clear();
    calc.memory_recall();
    assert_eq!(calc.display(), "20");

    press(&mut calc, "mc");
    assert_eq!(calc.memory(), 0.0);
    assert_eq!(calc.display(), "20");
}
