//! Expression tree → structured instructions. Each top-level expression
//! becomes exactly one [`Instruction`]; operands are matched against the
//! syntactic shapes from the register/`ref`/stack-keyword/literal table.

use dcpu::{Instruction, Opcode, Operand, RegisterId};

use crate::error::AssembleError;
use crate::expr::Expr;

pub fn lower(expressions: &[Expr]) -> Result<Vec<Instruction>, AssembleError> {
    expressions.iter().map(lower_one).collect()
}

fn lower_one(expr: &Expr) -> Result<Instruction, AssembleError> {
    let items = expr
        .as_list()
        .ok_or_else(|| AssembleError::MalformedOperand("expected a parenthesised instruction".into()))?;

    let (head, operands) = items
        .split_first()
        .ok_or_else(|| AssembleError::MalformedOperand("empty instruction".into()))?;

    let mnemonic = head
        .as_symbol()
        .ok_or_else(|| AssembleError::MalformedOperand("expected an opcode symbol".into()))?;

    let opcode = parse_opcode(mnemonic)?;

    if opcode.is_special() {
        let a = expect_arity(operands, mnemonic, 1)?[0];
        let (a_operand, word_a) = lower_operand(a, true)?;
        Ok(Instruction::special(opcode, a_operand, word_a))
    } else {
        let operands = expect_arity(operands, mnemonic, 2)?;
        let (b_operand, word_b) = lower_operand(operands[0], false)?;
        let (a_operand, word_a) = lower_operand(operands[1], true)?;
        Ok(Instruction::basic(opcode, b_operand, a_operand, word_b, word_a))
    }
}

fn parse_opcode(symbol: &str) -> Result<Opcode, AssembleError> {
    symbol
        .to_uppercase()
        .parse()
        .map_err(|_| AssembleError::UnknownOpcode(symbol.to_string()))
}

fn expect_arity<'a>(operands: &'a [Expr], mnemonic: &str, expected: usize) -> Result<&'a [Expr], AssembleError> {
    if operands.len() == expected {
        Ok(operands)
    } else {
        Err(AssembleError::WrongArity {
            opcode: mnemonic.to_uppercase(),
            expected,
            found: operands.len(),
        })
    }
}

/// Lowers one operand expression. `is_a` selects A-position rules (inline
/// literals, POP) vs B-position rules (always next-word literal, PUSH).
fn lower_operand(expr: &Expr, is_a: bool) -> Result<(Operand, u16), AssembleError> {
    match expr {
        Expr::Number(n) => Ok(literal_operand(*n, is_a)),
        Expr::Symbol(s) => lower_symbol_operand(s),
        Expr::List(items) => lower_ref_operand(items),
    }
}

/// Only handles `Expr::Number`; a short literal is never a bare register
/// symbol. In range `-1..=30` (`0xFFFF` or `0..=30`), the A position uses
/// the inline-literal encoding; otherwise (and always for B) it's a
/// next-word literal.
fn literal_operand(n: u16, is_a: bool) -> (Operand, u16) {
    if is_a && (n <= 30 || n == 0xFFFF) {
        (Operand::InlineLiteral(n as i16 as i32), 0)
    } else {
        (Operand::NextWordLiteral, n)
    }
}

fn lower_symbol_operand(symbol: &str) -> Result<(Operand, u16), AssembleError> {
    let upper = symbol.to_uppercase();
    match upper.as_str() {
        "PUSH" | "POP" => return Ok((Operand::PushPop, 0)),
        "PEEK" => return Ok((Operand::Peek, 0)),
        "SP" => return Ok((Operand::Sp, 0)),
        "PC" => return Ok((Operand::Pc, 0)),
        "EX" => return Ok((Operand::Ex, 0)),
        _ => {}
    }

    Ok((Operand::Register(parse_register(symbol)?), 0))
}

/// `(ref R)`, `(ref N)`, `(ref R N)`/`(ref N R)`, or `(ref sp N)` (Pick).
fn lower_ref_operand(items: &[Expr]) -> Result<(Operand, u16), AssembleError> {
    let (head, rest) = items
        .split_first()
        .ok_or_else(|| AssembleError::MalformedOperand("empty (ref ...) form".into()))?;

    let keyword = head
        .as_symbol()
        .ok_or_else(|| AssembleError::MalformedOperand("(ref ...) must start with `ref`".into()))?;
    if !keyword.eq_ignore_ascii_case("ref") {
        return Err(AssembleError::MalformedOperand(format!(
            "unexpected list operand head `{}`",
            keyword
        )));
    }

    match rest {
        [Expr::Symbol(s)] if s.eq_ignore_ascii_case("sp") => Err(AssembleError::MalformedOperand(
            "(ref sp) needs an offset, e.g. (ref sp 0)".into(),
        )),
        [Expr::Symbol(s)] => Ok((Operand::RegisterIndirect(parse_register(s)?), 0)),
        [Expr::Number(n)] => Ok((Operand::MemoryNextWord, *n)),
        [Expr::Symbol(s), Expr::Number(n)] if s.eq_ignore_ascii_case("sp") => Ok((Operand::Pick, *n)),
        [Expr::Symbol(s), Expr::Number(n)] => Ok((Operand::RegisterIndirectOffset(parse_register(s)?), *n)),
        [Expr::Number(n), Expr::Symbol(s)] => Ok((Operand::RegisterIndirectOffset(parse_register(s)?), *n)),
        _ => Err(AssembleError::MalformedOperand(format!(
            "malformed (ref ...) operand: {:?}",
            rest
        ))),
    }
}

fn parse_register(symbol: &str) -> Result<RegisterId, AssembleError> {
    symbol
        .to_uppercase()
        .parse()
        .map_err(|_| AssembleError::UnknownRegister(symbol.to_string()))
}
