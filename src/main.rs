use std::env;

use numint::configuration::Configuration;
use numint::pipeline;

fn main() {
    let configuration = env::args().nth(1).map_or_else(
        || Configuration::default(),
        |path| Configuration::from_reader(path).unwrap()
    );
    let request = configuration.default_request().unwrap();

    println!("f(x) = {}", configuration.expression());
    println!("interval: [{}, {}], subintervals: {}", request.lower(), request.upper(), request.subintervals());

    let (numeric, summary) = pipeline::run(
        configuration.expression(),
        request.lower(),
        request.upper(),
        request.subintervals()).unwrap();

    println!("{}", summary);
    println!();
    for (x, y) in numeric.x_samples().iter().zip(numeric.y_samples().iter()) {
        println!("{:>12.6}, {:>12.6}", x, y);
    }
}
