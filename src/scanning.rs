#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    identifier, number, operator, punctuation
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub content: String,
    pub kind: TokenKind,
}

impl Token {
    fn new(content: String, kind: TokenKind) -> Self {
        Self{content, kind}
    }
}

fn is_sign(character: char) -> bool {
    matches!(character, '+' | '-')
}

fn is_operator(character: char) -> bool {
    matches!(character, '*' | '/')
}

fn is_punctuation(character: char) -> bool {
    matches!(character, '(' | ')')
}

fn is_word_character(character: char) -> bool {
    !(character.is_whitespace() || is_sign(character) || is_operator(character) || is_punctuation(character))
}

pub struct StringScanner<'a> {
    string: &'a str,
    index: usize,
    expects_operand: bool,
}

impl<'a> StringScanner<'a> {
    pub fn new(string: &'a str) -> Self {
        Self {
            string,
            index: 0,
            expects_operand: true,
        }
    }

    fn count_matching<P: Fn(char) -> bool>(&self, predicate: P) -> usize {
        self.view()
            .chars()
            .take_while(|&c| predicate(c))
            .map(char::len_utf8)
            .sum()
    }

    fn view(&self) -> &'a str {
        &self.string[self.index..]
    }

    fn take_matching<P: Fn(char) -> bool>(&mut self, predicate: P) -> &'a str {
        let count = self.count_matching(predicate);
        let taken = &self.string[self.index..(self.index + count)];
        self.index += count;
        taken
    }

    fn skip_whitespace(&mut self) {
        self.take_matching(char::is_whitespace);
    }

    fn get_word(&mut self, sign: &str) -> Token {
        let word = self.take_matching(is_word_character);
        let kind = if word.starts_with(|c: char| c.is_ascii_digit()) {
            TokenKind::number
        } else {
            TokenKind::identifier
        };
        self.expects_operand = false;
        Token::new(format!("{sign}{word}"), kind)
    }

    fn get_single(&mut self, kind: TokenKind) -> Option<Token> {
        let character = self.view().chars().next()?;
        self.index += character.len_utf8();
        self.expects_operand = character != ')';
        Some(Token::new(character.into(), kind))
    }

    fn get_signs(&mut self) -> Option<Token> {
        let run: String = self
            .take_matching(|c| is_sign(c) || c.is_whitespace())
            .chars()
            .filter(|&c| is_sign(c))
            .collect();

        if !self.expects_operand {
            self.expects_operand = true;
            return Some(Token::new(run, TokenKind::operator));
        }

        // Unary: glue a negative sign onto the next word, drop a positive one.
        let sign = if run.matches('-').count() % 2 == 1 { "-" } else { "" };
        if self.view().starts_with(is_word_character) {
            Some(self.get_word(sign))
        } else if sign.is_empty() {
            self.get_token()
        } else {
            Some(Token::new(sign.into(), TokenKind::operator))
        }
    }

    fn get_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        match self.view().chars().next()? {
            c if is_sign(c) => self.get_signs(),
            c if is_operator(c) => self.get_single(TokenKind::operator),
            c if is_punctuation(c) => self.get_single(TokenKind::punctuation),
            _ => Some(self.get_word("")),
        }
    }
}

impl Iterator for StringScanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.get_token()
    }
}
