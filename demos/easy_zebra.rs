//! A small warm-up puzzle in the zebra-puzzle family, grounded on
//! `examples/easy-zebra.rs`, rebuilt on top of this crate's `clause`/
//! `relation` API instead of `proto_vulcan!`.
use microkanren::clause::{compile, conde_, fresh_, goal_, identical_};
use microkanren::query::{run, Limit};
use microkanren::relation::membero;
use microkanren::term::Term;
use microkanren::var::fresh_var;
use microkanren::Goal;

/// `x` lives directly to the right of `y` in the list of houses `l`.
fn righto(x: Term, y: Term, l: Term) -> Goal {
    microkanren::clause::defrel(move || {
        let first = fresh_var();
        let second = fresh_var();
        let rest = fresh_var();
        conde_(vec![
            vec![
                identical_(l.clone(), Term::cons(first.clone(), Term::cons(second.clone(), rest.clone()))),
                identical_(first, y.clone()),
                identical_(second, x.clone()),
            ],
            vec![
                identical_(l.clone(), Term::cons(fresh_var(), rest.clone())),
                goal_(righto(x.clone(), y.clone(), rest)),
            ],
        ])
    })
}

fn house(nationality: impl Into<Term>, color: impl Into<Term>) -> Term {
    Term::list(vec![nationality.into(), color.into()])
}

fn easy_zebrao(houses: Term) -> Goal {
    compile(&conde_(vec![vec![
        identical_(
            Term::list(vec![fresh_var(), house("italian", fresh_var()), fresh_var()]),
            houses.clone(),
        ),
        goal_(righto(house("spanish", fresh_var()), house(fresh_var(), Term::atom("red")), houses.clone())),
        goal_(membero(house("norwegian", Term::atom("blue")), houses)),
    ]]))
}

fn main() {
    let houses = fresh_var();
    let answers = run(Limit::At(1), &[houses.clone()], easy_zebrao(houses));
    match answers.first() {
        Some(answer) => println!("{}", answer[0]),
        None => println!("no solution"),
    }
}
