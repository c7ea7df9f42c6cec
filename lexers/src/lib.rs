mod scanner;
mod word_tokenizer;

pub use scanner::Scanner;
pub use word_tokenizer::WordTokenizer;
