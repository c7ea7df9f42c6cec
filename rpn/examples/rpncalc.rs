use rpn::{EvalErr, RPNExpr};
use rustyline::error::ReadlineError;

fn evalexpr(input: &str) -> Result<f64, EvalErr> {
    let expr = RPNExpr::parse_str(input)?;
    let value = expr.eval()?;
    println!("{} = {}", expr, value);
    Ok(value)
}

fn main() -> Result<(), String> {
    env_logger::init();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        return evalexpr(&input).map(|_| ()).map_err(|e| e.to_string());
    }

    let histpath = dirs::home_dir().map(|h| h.join(".rpncalc_history"));
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    println!("History error: {}", e);
                }
                if let Err(e) = evalexpr(&line) {
                    println!("Eval error: {}", e);
                }
            }
        }
    }
    if let Some(path) = &histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
