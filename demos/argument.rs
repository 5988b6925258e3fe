use clap::{Parser, ValueEnum};

use entail_rs::argument::Argument;
use entail_rs::logic::Logic;
use entail_rs::reference::Ref;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Example {
    /// Football, basketball, breakfast and happiness.
    Football,
    /// P → Q, P ⊨ Q.
    ModusPonens,
    /// P → Q, Q ⊭ P.
    AffirmingConsequent,
    /// P, ¬P ⊨ anything, but nothing satisfies them.
    Contradiction,
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Which argument to check.
    #[arg(value_enum, default_value = "football")]
    example: Example,

    /// Print the expressions as a Graphviz graph.
    #[clap(long)]
    dot: bool,

    /// Log level.
    #[clap(long, value_name = "LEVEL", default_value = "info")]
    log_level: simplelog::LevelFilter,

    /// Manager size (in bits, so the actual capacity is `2^size` nodes).
    #[clap(long, value_name = "INT", default_value = "10", value_parser = clap::value_parser!(u8).range(0..=31))]
    size: u8,
}

/// Builds the chosen argument and returns it with its variable list.
fn build(logic: &Logic, example: Example) -> color_eyre::Result<(Vec<Ref>, Argument)> {
    let res = match example {
        Example::Football => {
            let f = logic.mk_var("I played football");
            let s = logic.mk_var("I played basketball");
            let b = logic.mk_var("I ate breakfast");
            let h = logic.mk_var("I am happy");

            let conclusion = logic.build(h | f);
            let premises = [logic.build(f | b), logic.build(b | s), logic.build(h % b)];
            (vec![f, s, b, h], Argument::new(conclusion, premises)?)
        }
        Example::ModusPonens => {
            let p = logic.mk_var("P");
            let q = logic.mk_var("Q");
            (vec![p, q], Argument::new(q, [logic.build(p >> q), p])?)
        }
        Example::AffirmingConsequent => {
            let p = logic.mk_var("P");
            let q = logic.mk_var("Q");
            (vec![p, q], Argument::new(p, [logic.build(p >> q), q])?)
        }
        Example::Contradiction => {
            let p = logic.mk_var("P");
            let q = logic.mk_var("Q");
            (vec![p, q], Argument::new(q, [p, logic.build(!p)])?)
        }
    };
    Ok(res)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    log::info!("args = {:?}", args);

    let logic = Logic::new(args.size as usize);
    let (vars, argument) = build(&logic, args.example)?;

    println!("Premises:");
    for &p in argument.premises() {
        println!("  {}", logic.to_infix_string(p));
    }
    println!("Conclusion:");
    println!("  {}", logic.to_infix_string(argument.conclusion()));
    println!();

    let valid = logic.valid(&vars, &argument);
    let satisfiable = logic.satisfiable(&vars, &argument);
    println!("valid = {}", valid);
    println!("satisfiable = {}", satisfiable);

    let counterexamples = logic.counterexamples(&vars, &argument);
    if !counterexamples.is_empty() {
        println!("Counterexamples:");
        for row in &counterexamples {
            println!("  {}", logic.assignment_to_string(row));
        }
    }

    let witnesses = logic.witnesses(&vars, &argument);
    if !witnesses.is_empty() {
        println!("Witnesses:");
        for row in &witnesses {
            println!("  {}", logic.assignment_to_string(row));
        }
    }

    if args.dot {
        let mut roots = argument.premises().to_vec();
        roots.push(argument.conclusion());
        println!();
        print!("{}", logic.to_dot(&roots)?);
    }

    log::info!("logic = {:?}", logic);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_range() {
        let args = Cli::try_parse_from(["argument", "--size", "31"]).unwrap();
        assert_eq!(args.size, 31);
        assert_eq!(Cli::try_parse_from(["argument"]).unwrap().size, 10);
        assert!(Cli::try_parse_from(["argument", "--size", "32"]).is_err());
    }

    #[test]
    fn test_every_example_builds() {
        for example in Example::value_variants() {
            let logic = Logic::new(10);
            let (vars, argument) = build(&logic, *example).unwrap();
            assert!(!vars.is_empty());
            assert!(!argument.premises().is_empty());
        }
    }
}
