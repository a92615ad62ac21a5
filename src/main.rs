use anyhow::{bail, Context, Result};
use bounded_stack::{BoundedStack, StackError, Value};
use std::{
    env,
    io::{self, Write},
};
use tracing_subscriber::EnvFilter;

/// Used by the demo when `BOUNDED_STACK_CAPACITY` isn't set.
const DEFAULT_CAPACITY: usize = 100;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    run(config, &mut io::stdout().lock())
}

#[derive(Debug)]
struct Config {
    capacity: usize,
    /// Empty means "use the built-in demo sequence".
    values: Vec<String>,
}

impl Config {
    fn from_env() -> Result<Self> {
        let capacity = match env::var("BOUNDED_STACK_CAPACITY") {
            Ok(s) => s
                .trim()
                .parse::<usize>()
                .with_context(|| format!("BOUNDED_STACK_CAPACITY={s:?} is not a number"))?,
            Err(env::VarError::NotPresent) => DEFAULT_CAPACITY,
            Err(e) => return Err(e).context("reading BOUNDED_STACK_CAPACITY"),
        };
        if capacity == 0 {
            bail!("BOUNDED_STACK_CAPACITY must be at least 1");
        }

        Ok(Self {
            capacity,
            values: env::args().skip(1).collect(),
        })
    }
}

/// Drive one stack through the demo, writing the report to `out`.
fn run(config: Config, out: &mut impl Write) -> Result<()> {
    let mut stack = BoundedStack::new(config.capacity).context("creating stack")?;

    let custom = !config.values.is_empty();
    let values = if custom {
        config.values
    } else {
        vec!["Hello".into(), "World".into(), "!".into()]
    };

    for v in values {
        push_or_report(&mut stack, v)?;
    }
    writeln!(out, "Size after pushes: {}", stack.size())?;

    while !stack.is_empty() {
        let value = stack.pop().context("popping a non-empty stack")?;
        writeln!(out, "{value}")?;
    }
    writeln!(out, "Size after pops: {}", stack.size())?;

    if !custom {
        push_or_report(&mut stack, "Ba")?;
        push_or_report(&mut stack, "Bye!")?;
        writeln!(out, "Size before clear: {}", stack.size())?;
        stack.clear();
        writeln!(out, "Size after clear: {}", stack.size())?;
    }

    stack.destroy();
    Ok(())
}

/// A full stack is reported and skipped; anything else is fatal.
fn push_or_report(stack: &mut BoundedStack, value: impl Into<Value>) -> Result<()> {
    match stack.push(value) {
        Ok(()) => Ok(()),
        Err(e @ StackError::Full { .. }) => {
            eprintln!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn transcript(capacity: usize, values: &[&str]) -> String {
        let config = Config {
            capacity,
            values: values.iter().map(|v| v.to_string()).collect(),
        };
        let mut out = Vec::new();
        run(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn default_demo_pops_in_lifo_order() {
        assert_eq!(
            transcript(100, &[]),
            "Size after pushes: 3\n\
             !\n\
             World\n\
             Hello\n\
             Size after pops: 0\n\
             Size before clear: 2\n\
             Size after clear: 0\n"
        );
    }

    #[test]
    fn overflowing_values_are_skipped() {
        assert_eq!(
            transcript(2, &["a", "b", "c"]),
            "Size after pushes: 2\nb\na\nSize after pops: 0\n"
        );
    }
}
