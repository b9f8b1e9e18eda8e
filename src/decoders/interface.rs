use crate::config::Config;

use super::crack_results::CrackResult;

///! The Interface defines what the struct for each decoder looks like
pub struct Decoder<Type> {
    /// The English name of the decoder.
    pub name: &'static str,
    /// A description, you can take the first line from Wikipedia
    /// Sometimes our decoders do not exist on Wikipedia so we write our own.
    pub description: &'static str,
    /// Wikipedia Link
    pub link: &'static str,
    /// we don't use the Type, so we use PhantomData to mark it!
    pub phantom: std::marker::PhantomData<Type>,
}

/// All crackers share the same Crack trait.
/// Unlike a general purpose decoder, a cracker here always hands back a
/// result, even for input it can make no sense of.
pub trait Crack {
    /// This function generates a new crack trait
    fn new() -> Self
    where
        Self: Sized;
    /// Crack is the function that actually does the cracking
    fn crack(&self, text: &str, config: &Config) -> CrackResult;
}
