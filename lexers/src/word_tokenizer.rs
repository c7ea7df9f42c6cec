#![deny(warnings)]

use crate::scanner::Scanner;

fn is_white(c: &char) -> bool {
    c.is_whitespace()
}

// Splits input on runs of whitespace, words are yielded verbatim
pub struct WordTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> WordTokenizer<I> {
    pub fn new(source: I) -> Self {
        WordTokenizer{src: Scanner::new(source)}
    }

    pub fn scanner(source: I) -> Scanner<Self> {
        Scanner::new(Self::new(source))
    }
}

impl<I: Iterator<Item=char>> Iterator for WordTokenizer<I> {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.skip_all_if(is_white);
        self.src.ignore();
        if self.src.until(is_white) {
            Some(self.src.extract_string())
        } else {
            None
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
