use crate::common::*;
use crate::parse::ast;

pub trait AstVisitor {
    type Output;

    fn visit<T: ?Sized>(&mut self, node: &T) -> Self::Output
    where
        T: Accept<Self>,
    {
        node.accept(self)
    }

    fn visit_notation(&mut self, notation: &ast::RollNotation) -> Self::Output;

    fn visit_constant(&mut self, x: &Int) -> Self::Output;

    fn visit_dice_group(&mut self, dice: &ast::DiceGroup) -> Self::Output;
}

pub trait Accept<V: AstVisitor + ?Sized> {
    fn accept(&self, v: &mut V) -> V::Output;
}

impl<V: AstVisitor + ?Sized> Accept<V> for ast::RollNotation {
    fn accept(&self, v: &mut V) -> V::Output {
        v.visit_notation(self)
    }
}

impl<V: AstVisitor + ?Sized> Accept<V> for ast::Addend {
    fn accept(&self, v: &mut V) -> V::Output {
        match self {
            Self::Constant(x) => v.visit_constant(x),
            Self::Dice(x) => v.visit_dice_group(x),
        }
    }
}
