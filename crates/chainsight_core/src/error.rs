use std::fmt;

use jiff::civil::Date;

use crate::model::Region;

/// Errors raised while fitting a regression model
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// Not enough observations to fit the requested model
    EmptyTrainingSet,
    /// A feature row did not match the expected width
    DimensionMismatch { expected: usize, actual: usize },
    /// The normal equations have no unique solution (e.g. a constant feature)
    SingularSystem,
}

impl fmt::Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionError::EmptyTrainingSet => write!(f, "training set is empty"),
            RegressionError::DimensionMismatch { expected, actual } => {
                write!(f, "feature row has {actual} values, expected {expected}")
            }
            RegressionError::SingularSystem => {
                write!(f, "normal equations are singular, cannot fit model")
            }
        }
    }
}

impl std::error::Error for RegressionError {}

/// Errors raised while encoding prediction inputs
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// The region was never seen during training, so it has no one-hot column
    UntrainedRegion(Region),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UntrainedRegion(region) => {
                write!(f, "region {region} was not present in the training data")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Errors raised by the synthetic data generator
#[derive(Debug)]
pub enum GenerateError {
    InvalidDateRange { start: Date, end: Date },
    Date(jiff::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InvalidDateRange { start, end } => {
                write!(f, "invalid date range: {end} is before {start}")
            }
            GenerateError::Date(e) => write!(f, "date calculation error: {e}"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Date(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jiff::Error> for GenerateError {
    fn from(err: jiff::Error) -> Self {
        GenerateError::Date(err)
    }
}

/// Errors raised while assembling a monitoring snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorError {
    /// No external factor row exists for the requested date
    IndicatorNotFound(Date),
    /// The supplier table is empty, nothing to sample
    NoSuppliers,
}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorError::IndicatorNotFound(date) => {
                write!(f, "no economic indicator recorded for {date}")
            }
            MonitorError::NoSuppliers => write!(f, "supplier table is empty"),
        }
    }
}

impl std::error::Error for MonitorError {}
