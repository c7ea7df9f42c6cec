#![deny(warnings)]

/// A buffered cursor over any iterator that can backtrack to
/// previously seen items until they are extracted or ignored.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.fill_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: -1}
    }

    pub fn buffer_pos(&self) -> isize { self.pos }

    pub fn set_buffer_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn curr(&self) -> Option<I::Item> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).cloned()
    }

    // pull from the source until self.pos is backed by the buffer
    fn fill_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// Items consumed since the last extract/ignore.
    pub fn view(&self) -> &[I::Item] {
        let n = (self.pos + 1).clamp(0, self.buf.len() as isize) as usize;
        &self.buf[..n]
    }

    /// Drop everything consumed so far, the next item starts a fresh view.
    pub fn ignore(&mut self) {
        let n = self.view().len();
        self.buf.drain(..n);
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let items = self.view().to_vec();
        self.ignore();
        items
    }

    /// Advance only if the next item satisfies the predicate.
    pub fn accept_if<P>(&mut self, pred: P) -> Option<I::Item>
        where P: Fn(&I::Item) -> bool
    {
        let backtrack = self.buffer_pos();
        if let Some(next) = self.next() {
            if pred(&next) { return Some(next); }
        }
        self.set_buffer_pos(backtrack);
        None
    }

    // Consume while the predicate holds, returns if the scanner advanced.
    // Afterwards self.curr() is the last matching item
    pub fn skip_all_if<P>(&mut self, pred: P) -> bool
        where P: Fn(&I::Item) -> bool
    {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() { advanced = true; }
        advanced
    }

    // Consume until an item satisfies the predicate or EOF, returns if the
    // scanner advanced. The matching item is left unconsumed
    pub fn until<P>(&mut self, pred: P) -> bool
        where P: Fn(&I::Item) -> bool
    {
        let mut advanced = false;
        while let Some(next) = self.peek() {
            if pred(&next) { break; }
            self.next();
            advanced = true;
        }
        advanced
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }
}
