//! The classic five-houses puzzle, grounded on `examples/hard-zebra.rs`.
//! That version leans on `!=` disequality to keep each house's nationality
//! distinct; this crate has no disequality, so distinctness instead comes
//! from relating each attribute column to a `permuteo` of its five known
//! values.
use microkanren::clause::{compile, conj_, identical_, Clause};
use microkanren::query::{run, Limit};
use microkanren::relation::permuteo;
use microkanren::term::Term;
use microkanren::var::fresh_vars;
use microkanren::Goal;

fn column(domain: &[&str], vars: &[Term]) -> Clause {
    let domain = Term::list(domain.iter().map(|s| Term::atom(*s)).collect::<Vec<_>>());
    Clause::Embed(permuteo(domain, Term::list(vars.to_vec())))
}

fn same_index(a: &[Term], av: Term, b: &[Term], bv: Term) -> Clause {
    Clause::Embed(microkanren::clause::defrel({
        let a = a.to_vec();
        let b = b.to_vec();
        move || {
            microkanren::clause::disj_((0..a.len()).map(|i| {
                conj_(vec![identical_(a[i].clone(), av.clone()), identical_(b[i].clone(), bv.clone())])
            }))
        }
    }))
}

fn left_of(a: &[Term], av: Term, b: &[Term], bv: Term) -> Clause {
    Clause::Embed(microkanren::clause::defrel({
        let a = a.to_vec();
        let b = b.to_vec();
        move || {
            microkanren::clause::disj_((0..a.len() - 1).map(|i| {
                conj_(vec![identical_(a[i].clone(), av.clone()), identical_(b[i + 1].clone(), bv.clone())])
            }))
        }
    }))
}

fn next_to(a: &[Term], av: Term, b: &[Term], bv: Term) -> Clause {
    microkanren::clause::disj_(vec![
        left_of(a, av.clone(), b, bv.clone()),
        left_of(b, bv, a, av),
    ])
}

fn zebrao() -> (Goal, Vec<Term>, Vec<Term>) {
    let nat = fresh_vars(5);
    let color = fresh_vars(5);
    let drink = fresh_vars(5);
    let cig = fresh_vars(5);
    let pet = fresh_vars(5);

    let english = Term::atom("english");
    let swedish = Term::atom("swedish");
    let danish = Term::atom("danish");
    let norwegian = Term::atom("norwegian");
    let german = Term::atom("german");

    let red = Term::atom("red");
    let green = Term::atom("green");
    let white = Term::atom("white");
    let yellow = Term::atom("yellow");
    let blue = Term::atom("blue");

    let tea = Term::atom("tea");
    let coffee = Term::atom("coffee");
    let milk = Term::atom("milk");
    let beer = Term::atom("beer");
    let water = Term::atom("water");

    let pallmall = Term::atom("pallmall");
    let dunhill = Term::atom("dunhill");
    let blend = Term::atom("blend");
    let bluemaster = Term::atom("bluemaster");
    let prince = Term::atom("prince");

    let dog = Term::atom("dog");
    let bird = Term::atom("bird");
    let cat = Term::atom("cat");
    let horse = Term::atom("horse");
    let fish = Term::atom("fish");

    let clause = conj_(vec![
        column(&["english", "swedish", "danish", "norwegian", "german"], &nat),
        column(&["red", "green", "white", "yellow", "blue"], &color),
        column(&["tea", "coffee", "milk", "beer", "water"], &drink),
        column(&["pallmall", "dunhill", "blend", "bluemaster", "prince"], &cig),
        column(&["dog", "bird", "cat", "horse", "fish"], &pet),
        same_index(&nat, english, &color, red), // 1
        same_index(&nat, swedish.clone(), &pet, dog), // 2
        same_index(&nat, danish, &drink, tea), // 3
        left_of(&color, green.clone(), &color, white), // 4
        same_index(&color, green, &drink, coffee), // 5
        same_index(&cig, pallmall, &pet, bird), // 6
        same_index(&color, yellow, &cig, dunhill.clone()), // 7
        identical_(drink[2].clone(), milk), // 8
        identical_(nat[0].clone(), norwegian.clone()), // 9
        next_to(&cig, blend.clone(), &pet, cat), // 10
        next_to(&pet, horse, &cig, dunhill), // 11
        same_index(&cig, bluemaster, &drink, beer), // 12
        same_index(&nat, german, &cig, prince), // 13
        next_to(&nat, norwegian, &color, blue), // 14
        next_to(&cig, blend, &drink, water), // 15
    ]);
    (compile(&clause), nat, pet)
}

fn main() {
    let (goal, nat, pet) = zebrao();
    let query_vars: Vec<Term> = nat.iter().cloned().chain(pet.iter().cloned()).collect();
    let answers = run(Limit::At(1), &query_vars, goal);
    match answers.first() {
        Some(answer) => {
            let nationalities = &answer[0..5];
            let pets = &answer[5..10];
            for (n, p) in nationalities.iter().zip(pets.iter()) {
                println!("{} owns the {}", n, p);
            }
        }
        None => println!("no solution"),
    }
}
