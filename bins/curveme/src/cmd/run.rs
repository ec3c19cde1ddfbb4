//! `run` and `validate` subcommands.
use alloy_primitives::hex;
use clap::{Args, Parser};
use precompile::{try_execute, PrecompileError, PrecompileId, Precompiles, ResultCode};
use std::{borrow::Cow, fs, io::Error as IoError, path::PathBuf, time::Instant};
use tracing::debug;

/// `run` and `validate` errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input file is missing.
    #[error("The specified path does not exist")]
    PathNotExists,
    /// Input is not hex.
    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    /// The operation rejected the input.
    #[error("{op} returned code {} ({code}): {source}", .code.as_u8())]
    Rejected {
        /// Operation that ran
        op: PrecompileId,
        /// Code reported to callers
        code: ResultCode,
        /// Detailed reason
        source: PrecompileError,
    },
    /// Reading the input file failed.
    #[error(transparent)]
    Io(#[from] IoError),
}

impl Error {
    fn rejected(op: PrecompileId, source: PrecompileError) -> Self {
        Self::Rejected {
            op,
            code: source.result_code(),
            source,
        }
    }
}

/// Operation and input shared by `run` and `validate`.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Operation name (`BLS12_G1MSM`) or opcode (`0x0d`)
    op: PrecompileId,
    /// Hex encoded input, with or without `0x`
    #[arg(required_unless_present = "path")]
    input: Option<String>,
    /// Path to a file containing the hex encoded input
    ///
    /// Overrides the positional `input` argument.
    #[arg(long)]
    path: Option<PathBuf>,
}

impl InputArgs {
    fn read(&self) -> Result<Vec<u8>, Error> {
        let input: Cow<'_, str> = if let Some(path) = &self.path {
            if !path.exists() {
                return Err(Error::PathNotExists);
            }
            fs::read_to_string(path)?.into()
        } else {
            self.input.as_deref().unwrap_or_default().into()
        };
        Ok(hex::decode(input.trim())?)
    }
}

/// `run` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    #[command(flatten)]
    args: InputArgs,
}

impl Cmd {
    /// Executes the operation and prints the result code and the output.
    pub fn run(&self) -> Result<(), Error> {
        let op = self.args.op;
        let input = self.args.read()?;
        let mut output = vec![0u8; op.output_len()];

        let timer = Instant::now();
        let result = try_execute(op, &input, &mut output);
        debug!(%op, input_len = input.len(), elapsed = ?timer.elapsed(), "executed");

        result.map_err(|err| Error::rejected(op, err))?;
        println!("code: {} ({})", ResultCode::Success.as_u8(), ResultCode::Success);
        println!("output: {}", hex::encode_prefixed(&output));
        Ok(())
    }
}

/// `validate` subcommand
#[derive(Parser, Debug)]
pub struct ValidateCmd {
    #[command(flatten)]
    args: InputArgs,
}

impl ValidateCmd {
    /// Runs only the decode and validation path of the operation.
    pub fn run(&self) -> Result<(), Error> {
        let op = self.args.op;
        let input = self.args.read()?;
        Precompiles::new()
            .get(op)
            .ok_or(PrecompileError::UnknownOperation(op.opcode()))
            .and_then(|precompile| precompile.validate(&input))
            .map_err(|err| Error::rejected(op, err))?;
        println!("{op}: valid ({} bytes)", input.len());
        Ok(())
    }
}
