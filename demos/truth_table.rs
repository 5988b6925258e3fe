use entail_rs::logic::Logic;
use entail_rs::reference::Ref;

fn report(logic: &Logic, title: &str, a: Ref, b: Ref, vars: &[Ref]) {
    println!("── {} ──", title);
    println!("f0 = {}", logic.to_infix_string(a));
    println!("f1 = {}", logic.to_infix_string(b));
    print!("{}", logic.truth_table(&[a, b], vars));

    if logic.equivalent(a, b, vars) {
        println!("Expressions are equivalent.");
    } else {
        println!("Expressions are not equivalent. Differing rows:");
        for row in logic.compare(a, b, vars) {
            println!("  {}", logic.assignment_to_string(&row));
        }
    }
    println!();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Warn,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let logic = Logic::default();
    let a = logic.mk_var("A");
    let b = logic.mk_var("B");
    let c = logic.mk_var("C");

    // De Morgan: ¬(A ∧ B) ≡ ¬A ∨ ¬B
    let na = logic.build(!a);
    let nb = logic.build(!b);
    let ab = logic.build(a & b);
    let lhs = logic.build(!ab);
    let rhs = logic.build(na | nb);
    report(&logic, "De Morgan", lhs, rhs, &[a, b]);

    // Circuit simplification: ((A ∨ ¬C) ∧ (B ∨ ¬C)) ∧ ((C ∨ B) ∧ (C ∨ A)) versus A ∧ B
    let nc = logic.build(!c);
    let left = logic.mk_and(logic.mk_or(a, nc), logic.mk_or(b, nc));
    let right = logic.mk_and(logic.mk_or(c, b), logic.mk_or(c, a));
    let original = logic.mk_and(left, right);
    report(&logic, "Circuit simplification", original, ab, &[a, b, c]);

    // A wrong simplification, for contrast.
    let wrong = logic.build(a | b);
    report(&logic, "Wrong simplification", original, wrong, &[a, b, c]);

    Ok(())
}
