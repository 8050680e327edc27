use anyhow::Error;
use dialbook_config::ConfigError;
use dialbook_core::{CoreError, UnsupportedFormat};
use dialbook_exchange::ExchangeError;
use dialbook_store::error::{StoreError, StoreErrorKind};
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::NotFound(_) => EXIT_NOT_FOUND,
            });
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(exchange_err) = cause.downcast_ref::<ExchangeError>() {
            return ExitCode::from(exchange_exit_code(exchange_err));
        }
        if cause.downcast_ref::<CoreError>().is_some()
            || cause.downcast_ref::<UnsupportedFormat>().is_some()
        {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::InvalidIndex => EXIT_NOT_FOUND,
        StoreErrorKind::DuplicatePhone
        | StoreErrorKind::InvalidDataPath
        | StoreErrorKind::Core => EXIT_INVALID_INPUT,
        StoreErrorKind::CorruptStorage
        | StoreErrorKind::MissingHomeDir
        | StoreErrorKind::Json
        | StoreErrorKind::Io => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidExportFormat(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn exchange_exit_code(err: &ExchangeError) -> u8 {
    match err {
        ExchangeError::Store(store_err) => store_exit_code(store_err),
        ExchangeError::Io(_) => EXIT_FAILURE,
        ExchangeError::Core(_)
        | ExchangeError::Json(_)
        | ExchangeError::Parse(_)
        | ExchangeError::UnsupportedFormat(_)
        | ExchangeError::Unavailable(_) => EXIT_INVALID_INPUT,
        #[cfg(feature = "excel")]
        ExchangeError::ExcelWrite(_) => EXIT_FAILURE,
        #[cfg(feature = "excel")]
        ExchangeError::ExcelRead(_) => EXIT_INVALID_INPUT,
    }
}
