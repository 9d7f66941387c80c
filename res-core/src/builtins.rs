// The default library: every character a fresh Res program can use
//
// The root table holds the everyday operators and literals. Three sub-tables
// hold the rest: `$` for lists, `&` for namespaces and control, `#` for
// numbers in other bases.

use crate::namespace::{Namespace, TableId};
use crate::primitives::{
    arithmetic, chars, control, data, io, lists, literals, names, scope, stack,
};
use crate::value::{Item, NativeFn, Operator};

fn native(ns: &mut Namespace, table: TableId, key: char, name: &'static str, run: NativeFn) {
    ns.insert(table, key, Operator::native(name, run));
}

pub fn default_namespace() -> Namespace {
    let mut ns = Namespace::new();
    let root = ns.root();

    // Characters that do nothing, so programs can be spaced out
    let nop = Operator::native("nop", control::nop_impl);
    for c in [' ', '\n', '\t', '\r', '\0'] {
        ns.insert(root, c, nop.clone());
    }

    // Lists
    ns.insert(root, '[', Item::Bookend);
    native(&mut ns, root, ']', "list-make", lists::list_make_impl);

    // Arithmetic
    native(&mut ns, root, '+', "add", arithmetic::add_impl);
    native(&mut ns, root, '-', "subtract", arithmetic::subtract_impl);
    native(&mut ns, root, '*', "multiply", arithmetic::multiply_impl);
    native(&mut ns, root, '/', "divide", arithmetic::divide_impl);
    native(&mut ns, root, '%', "modulus", arithmetic::modulus_impl);
    native(&mut ns, root, '~', "negate", arithmetic::negate_impl);
    native(&mut ns, root, '^', "minmax", arithmetic::minmax_impl);

    // Data
    native(&mut ns, root, '=', "eq", data::eq_impl);
    native(&mut ns, root, 'T', "type", data::type_impl);

    // Characters
    native(&mut ns, root, 'o', "ord", chars::ord_impl);
    native(&mut ns, root, 'k', "chr", chars::chr_impl);

    // Stack and scopes
    native(&mut ns, root, ':', "dup", stack::dup_impl);
    native(&mut ns, root, '\\', "swap", stack::swap_impl);
    native(&mut ns, root, 'x', "del", stack::del_impl);
    native(&mut ns, root, 'B', "bury", stack::bury_impl);
    native(&mut ns, root, 'D', "dig", stack::dig_impl);
    native(&mut ns, root, 'r', "rotate", stack::rotate_impl);
    native(&mut ns, root, '(', "stack-push", scope::stack_push_impl);
    native(&mut ns, root, ')', "stack-pop", scope::stack_pop_impl);

    // Control
    native(&mut ns, root, '!', "push-me", control::push_me_impl);
    native(&mut ns, root, '?', "cond", control::cond_impl);
    native(&mut ns, root, 'E', "exec", control::exec_impl);
    native(&mut ns, root, 'F', "label-exec", control::label_exec_impl);
    native(&mut ns, root, 'R', "return", control::return_impl);

    // Namespace
    native(&mut ns, root, 'S', "store", names::store_impl);

    // I/O
    native(&mut ns, root, 'p', "print", io::print_impl);
    native(&mut ns, root, 'P', "pretty-print", io::pretty_print_impl);
    native(&mut ns, root, 'G', "get-line", io::get_line_impl);
    native(&mut ns, root, 'g', "get-char", io::get_char_impl);

    // Literals
    ns.insert(root, 'n', Item::Char('\n'));
    ns.insert(root, 't', Item::Char('\t'));
    ns.insert(root, 'z', Item::List(crate::compat::Vec::new()));
    for (value, c) in ('0'..='9').chain('a'..='f').enumerate() {
        ns.insert(root, c, Item::Number(value as f64));
    }
    ns.insert(root, '\'', literals::char_mode());
    ns.insert(root, '"', literals::string_mode());
    ns.insert(root, '{', literals::code_block_mode());
    ns.insert(root, ';', literals::comment_mode());

    // $: lists
    let list = ns.insert_table(root, '$');
    native(&mut ns, list, '+', "list-concat", lists::concat_impl);
    native(&mut ns, list, '/', "list-slice", lists::slice_impl);
    native(&mut ns, list, 'G', "list-grab", lists::grab_impl);
    native(&mut ns, list, 'S', "list-splat", lists::splat_impl);
    native(&mut ns, list, '[', "list-open", lists::open_impl);
    native(&mut ns, list, '@', "list-at", lists::at_impl);
    native(&mut ns, list, 'F', "flatten", lists::flatten_impl);

    // &: namespaces and control
    let ctrl = ns.insert_table(root, '&');
    native(&mut ns, ctrl, ':', "ns-copy", names::ns_copy_impl);
    native(&mut ns, ctrl, 'x', "ns-del", names::ns_del_impl);
    native(&mut ns, ctrl, 'O', "oper-make", names::oper_make_impl);
    native(&mut ns, ctrl, 'R', "readmode-make", names::readmode_make_impl);
    native(&mut ns, ctrl, 'C', "close-mode", control::close_mode_impl);
    native(&mut ns, ctrl, 'c', "close-back", control::close_back_impl);
    native(&mut ns, ctrl, 'D', "delay-exec", control::delay_exec_impl);
    native(&mut ns, ctrl, 'L', "push-label", control::push_label_impl);
    native(&mut ns, ctrl, 'W', "wrap", control::wrap_impl);

    // #: numbers
    let num = ns.insert_table(root, '#');
    ns.insert(num, 'b', literals::base2_mode());
    ns.insert(num, 'o', literals::base8_mode());
    ns.insert(num, 'd', literals::base10_mode());
    ns.insert(num, 'x', literals::base16_mode());
    ns.insert(num, 'z', literals::base36_mode());

    ns
}
