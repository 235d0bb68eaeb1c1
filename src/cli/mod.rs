//! Interactive read-eval loop.

use std::io::{self, BufRead, Write};

use crate::agent::ConversationAgent;

/// Printed once before the first prompt.
pub const BANNER: &str = "\
Chatbot initialized. Type 'quit' to exit.

Available tools:
- Weather information for any city
- Latest news updates
- System performance metrics
- Current date and time
- Wolfram Alpha queries";

const PROMPT: &str = "\nYou: ";

/// Whether a line of input ends the session.
pub fn is_quit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("quit")
}

/// Read lines from `input`, run each through the agent, and print replies.
///
/// Stops on `quit` or end of input. Each turn is awaited before the next
/// line is read.
pub async fn run_repl<R, W>(
    agent: &mut ConversationAgent,
    mut input: R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{BANNER}")?;

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let user_input = line.trim();
        if is_quit(user_input) {
            break;
        }

        let reply = agent.process_message(user_input).await;
        writeln!(output, "Assistant: {reply}")?;
    }

    Ok(())
}
