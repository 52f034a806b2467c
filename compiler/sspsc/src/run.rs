//! Running programs and reporting fatal errors.

use std::sync::Arc;

use ssps_eval::{EvalConfig, EvalError, Interpreter, SharedPrintHandler};

use crate::input::{load_source, LoadError};

/// Why a run stopped early. The report has already been printed.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Evaluate `source`, printing the fatal report to `handler` on failure.
pub fn run_source(
    source: &str,
    config: EvalConfig,
    handler: &SharedPrintHandler,
) -> Result<(), EvalError> {
    let mut interpreter = Interpreter::with_print_handler(config, Arc::clone(handler));
    let result = interpreter.run(source);
    if let Err(err) = &result {
        tracing::debug!(operation = err.operation, kind = ?err.kind, "program failed");
        interpreter.report_fatal(err);
    }
    result
}

/// Load and evaluate the program at `path`.
pub fn run_file(
    path: &str,
    config: EvalConfig,
    handler: &SharedPrintHandler,
) -> Result<(), RunError> {
    let source = match load_source(path) {
        Ok(source) => source,
        Err(err) => {
            handler.println(&err.report());
            return Err(err.into());
        }
    };
    run_source(&source, config, handler)?;
    Ok(())
}
