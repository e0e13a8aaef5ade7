//! Python bindings for printline via PyO3
//!
//! Inside a Python process the console routes into the interpreter instead of
//! the raw std streams: logger calls go to the `logging` module and system
//! log lines to `sys.stdout`.

use std::borrow::Cow;
use std::error::Error;
use std::sync::Arc;

use pyo3::exceptions::{PyBaseException, PyRuntimeError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use printline_core::console::{self, Console};
use printline_core::logging::{render, LogLevel, Logger, EXCEPTION_UNSUPPORTED};
use printline_core::sink::Sink;

// ============================================================================
// Host Logger
// ============================================================================

/// Logger forwarding to a Python `logging.Logger`
pub struct PythonLogger {
    logger: Py<PyAny>,
}

impl PythonLogger {
    /// Wrap `logging.getLogger(name)`
    pub fn new(py: Python<'_>, name: &str) -> PyResult<Self> {
        let logger = py.import("logging")?.call_method1("getLogger", (name,))?;
        Ok(Self {
            logger: logger.unbind(),
        })
    }

    fn method_for(level: LogLevel) -> &'static str {
        match level {
            LogLevel::Log => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error | LogLevel::Exception => "error",
        }
    }
}

impl Logger for PythonLogger {
    fn log(&self, text: &str, stack: Option<&str>, level: LogLevel) {
        Python::with_gil(|py| {
            let text = match level {
                LogLevel::Exception => Cow::Borrowed(EXCEPTION_UNSUPPORTED),
                _ => render(text, stack),
            };
            let result = self
                .logger
                .bind(py)
                .call_method1(Self::method_for(level), (&*text,));
            if let Err(err) = result {
                err.write_unraisable(py, None);
            }
        });
    }

    fn log_exception(&self, error: &(dyn Error + 'static)) {
        Python::with_gil(|py| {
            let logger = self.logger.bind(py);
            let result = match error.downcast_ref::<PyErr>() {
                Some(err) => {
                    let kwargs = PyDict::new(py);
                    kwargs
                        .set_item("exc_info", err.value(py))
                        .and_then(|_| logger.call_method("error", (err.to_string(),), Some(&kwargs)))
                }
                None => logger.call_method1("error", (error.to_string(),)),
            };
            if let Err(err) = result {
                err.write_unraisable(py, None);
            }
        });
    }
}

// ============================================================================
// Host Sink
// ============================================================================

/// Sink writing system log lines to `sys.stdout`
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonSink;

impl Sink for PythonSink {
    fn write_line(&self, line: &str) {
        Python::with_gil(|py| {
            let result = py
                .import("sys")
                .and_then(|sys| sys.getattr("stdout"))
                .and_then(|stdout| stdout.call_method1("write", (line,)));
            if let Err(err) = result {
                err.write_unraisable(py, None);
            }
        });
    }
}

// ============================================================================
// Module Functions
// ============================================================================

/// Route the process-wide console into Python's `logging` and `sys.stdout`
#[pyfunction]
#[pyo3(signature = (name = "printline"))]
pub fn install_python_logger(py: Python<'_>, name: &str) -> PyResult<()> {
    let logger = PythonLogger::new(py, name)?;
    let console = Console::builder()
        .logger(Arc::new(logger))
        .sink(Arc::new(PythonSink))
        .build();
    console::install(console).map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

#[pyfunction]
pub fn log(text: &str) {
    console::log(text);
}

#[pyfunction]
pub fn log_warning(text: &str) {
    console::log_warning(text);
}

#[pyfunction]
#[pyo3(signature = (text, stack = None))]
pub fn log_error(text: &str, stack: Option<&str>) {
    match stack {
        Some(stack) => console::log_error_with_stack(text, stack),
        None => console::log_error(text),
    }
}

/// Log a live exception object with its traceback
#[pyfunction]
pub fn log_exception(exc: &Bound<'_, PyBaseException>) {
    let err = PyErr::from_value(exc.clone().into_any());
    console::log_exception(&err);
}

#[pyfunction]
pub fn system_log(text: &str) {
    console::system_log(text);
}

#[pyfunction]
pub fn batch_log() -> bool {
    console::batch_log()
}

#[pyfunction]
pub fn set_batch_log(enabled: bool) {
    console::set_batch_log(enabled);
}

// ============================================================================
// Module Definition
// ============================================================================

#[pymodule]
fn printline(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(install_python_logger, m)?)?;
    m.add_function(wrap_pyfunction!(log, m)?)?;
    m.add_function(wrap_pyfunction!(log_warning, m)?)?;
    m.add_function(wrap_pyfunction!(log_error, m)?)?;
    m.add_function(wrap_pyfunction!(log_exception, m)?)?;
    m.add_function(wrap_pyfunction!(system_log, m)?)?;
    m.add_function(wrap_pyfunction!(batch_log, m)?)?;
    m.add_function(wrap_pyfunction!(set_batch_log, m)?)?;

    m.add("WARNING_MARKER", printline_core::WARNING_MARKER)?;
    m.add("ERROR_MARKER", printline_core::ERROR_MARKER)?;

    Ok(())
}
