/// Cursor over an immutable address text.
///
/// Reads never look behind the cursor; each one returns what it consumed
/// and advances by exactly that length.
pub struct TextReader<'a> {
    text: &'a [u8],
    pos: usize,
}

impl<'a> TextReader<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Self { text, pos: 0 }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.text.get(self.pos).copied()
    }

    /// Everything from the cursor to the end of the text.
    pub fn rest(&self) -> &'a [u8] {
        self.text.get(self.pos..).unwrap_or_default()
    }

    /// Consumes `byte` if it is next.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the longest run of bytes matching `pred`.
    pub fn take_while(&mut self, pred: impl Fn(&u8) -> bool) -> &'a [u8] {
        let rest = self.rest();
        let len = rest.iter().take_while(|b| pred(*b)).count();
        self.pos += len;
        &rest[..len]
    }

    pub fn read_decimal_digits(&mut self) -> &'a [u8] {
        self.take_while(u8::is_ascii_digit)
    }

    pub fn read_hex_digits(&mut self) -> &'a [u8] {
        self.take_while(u8::is_ascii_hexdigit)
    }
}
