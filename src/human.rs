use std::io::{stdin, stdout, BufRead, BufReader, Write};

use crate::{agent::Agent, error::SearchError, state::GameState};

/// Prompts a person for a move until a legal one is entered
pub struct HumanAgent {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl HumanAgent {
    /// Reads moves from stdin and prompts on stdout
    pub fn new() -> Self {
        Self::with_io(BufReader::new(stdin()), stdout())
    }

    pub fn with_io<R: BufRead + 'static, W: Write + 'static>(input: R, output: W) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }
}

impl Default for HumanAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Agent<S> for HumanAgent {
    fn get_move(&mut self, state: &S) -> Result<(S::Move, S), SearchError> {
        let mut successors = state.successors();
        if successors.is_empty() {
            return Err(SearchError::NoSuccessors);
        }

        let legal: Vec<String> = successors.iter().map(|(m, _)| m.to_string()).collect();
        let prompt = format!("Kindly enter your move [{}]: ", legal.join(", "));

        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut buffer = String::new();
            if self.input.read_line(&mut buffer)? == 0 {
                return Err(SearchError::InputClosed);
            }

            // anything unparsable or illegal just asks again
            let choice = match buffer.trim().parse::<S::Move>() {
                Ok(choice) => choice,
                Err(_) => continue,
            };
            if let Some(idx) = successors.iter().position(|(m, _)| *m == choice) {
                return Ok(successors.swap_remove(idx));
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
