use tracing::{debug, trace};

use crate::{
    ast::{Statement, parse_statement, starts_else},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            condition::evaluate_condition, core::EvalResult, expression::evaluate_expression,
        },
        executor::core::Interpreter,
        host::Host,
        value::core::Value,
    },
    util::num::parse_count,
};

impl<H: Host> Interpreter<H> {
    /// Executes the statement on program line `index`.
    ///
    /// # Returns
    /// The program index of the next line to execute in the current
    /// context. Block statements skip past the blocks they captured.
    pub(crate) fn execute_line(&mut self, index: usize) -> EvalResult<usize> {
        let Some(text) = self.lines.get(index).cloned() else {
            return Ok(index + 1);
        };
        let line = index + 1;
        let statement = parse_statement(&text);
        trace!(line, ?statement, "execute");

        match statement {
            Statement::Empty => Ok(index + 1),
            Statement::Print { expr } => {
                let value = evaluate_expression(expr, &self.store, line)?;
                self.host.append(&format!("{value}\n"));
                Ok(index + 1)
            },
            Statement::Input { name, prompt } => {
                let input = self.host.request_line(&prompt);
                let value = Value::from_input(&input);
                debug!(line, name, value = %value, "input");
                self.store.set(name, value);
                Ok(index + 1)
            },
            Statement::If { condition } => self.execute_if(&condition, index),
            Statement::Repeat { count } => self.execute_repeat(count, index),
            Statement::Assignment { name, expr } => {
                let value = evaluate_expression(expr, &self.store, line)?;
                self.store.set(name, value);
                Ok(index + 1)
            },
            Statement::Unrecognized { text: unknown } => Err(Self::unrecognized(unknown, index)),
        }
    }

    /// `만약 condition {` with an optional `아니면 {` block right after the
    /// then block. The condition is evaluated before either block is
    /// captured, and at most one block runs.
    fn execute_if(&mut self, condition: &str, index: usize) -> EvalResult<usize> {
        let holds = evaluate_condition(condition, &self.store, index + 1)?;

        let then_block = self.capture_block(index);
        let mut next = then_block.end + 1;

        let else_block = if next < self.scan_limit()
                            && self.lines.get(next).is_some_and(|line| starts_else(line))
        {
            let block = self.capture_block(next);
            next = block.end + 1;
            Some(block)
        } else {
            None
        };

        debug!(line = index + 1, holds, has_else = else_block.is_some(), "if");

        if holds {
            self.run_block(then_block.body)?;
        } else if let Some(block) = else_block {
            self.run_block(block.body)?;
        }

        Ok(next)
    }

    /// `반복 count {`: runs the block `count` times, each iteration in a
    /// fresh context starting on the first body line.
    fn execute_repeat(&mut self, count: &str, index: usize) -> EvalResult<usize> {
        let times = parse_count(count).ok_or_else(|| RuntimeError::InvalidCount { count:
                                                                                      count.to_string(),
                                                                                  line:  index + 1, })?;
        let block = self.capture_block(index);
        debug!(line = index + 1, times, body = ?block.body, "repeat");

        for iteration in 0..times {
            trace!(line = index + 1, iteration, "repeat iteration");
            self.run_block(block.body.clone())?;
        }

        Ok(block.end + 1)
    }
}
