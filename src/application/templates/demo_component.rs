use crate::domain::ComponentType;

/// Separator placed between an error banner and the demo component that
/// follows it.
pub const DEMO_SEPARATOR: &str = "<!-- DEMO COMPONENT -->\n";

/// Static placeholder markup for a component type. Needs no network access and
/// always starts with a `<!-- DEMO COMPONENT - Type: ... -->` marker.
pub fn demo_component(component_type: ComponentType) -> String {
    format!(
        "<!-- DEMO COMPONENT - Type: {} -->\n{}",
        component_type,
        template_for(component_type)
    )
}

fn template_for(component_type: ComponentType) -> &'static str {
    match component_type {
        ComponentType::Header => HEADER,
        ComponentType::Hero => HERO,
        ComponentType::Section => SECTION,
        ComponentType::Features => FEATURES,
        ComponentType::Testimonials => TESTIMONIALS,
        ComponentType::Contact => CONTACT,
        ComponentType::Footer => FOOTER,
        ComponentType::Custom => CUSTOM,
    }
}

const HEADER: &str = r##"
<header class="bg-white shadow">
  <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
    <div class="flex justify-between items-center">
      <div class="flex items-center">
        <span class="text-indigo-600 font-bold text-xl">LOGO</span>
      </div>
      <nav class="hidden md:flex space-x-10">
        <a href="#" class="text-gray-500 hover:text-gray-900">Home</a>
        <a href="#" class="text-gray-500 hover:text-gray-900">Products</a>
        <a href="#" class="text-gray-500 hover:text-gray-900">Services</a>
        <a href="#" class="text-gray-500 hover:text-gray-900">About</a>
        <a href="#" class="text-gray-500 hover:text-gray-900">Contact</a>
      </nav>
      <div>
        <button class="bg-indigo-600 text-white px-4 py-2 rounded-md hover:bg-indigo-700">
          Get started
        </button>
      </div>
    </div>
  </div>
</header>"##;

const HERO: &str = r##"
<section class="bg-indigo-700">
  <div class="max-w-7xl mx-auto py-24 px-4 sm:px-6 lg:px-8 text-center">
    <h1 class="text-4xl font-extrabold text-white sm:text-5xl md:text-6xl">
      Build something people love
    </h1>
    <p class="mt-6 max-w-2xl mx-auto text-xl text-indigo-100">
      A short sentence that explains what you offer and why it matters to your visitors.
    </p>
    <div class="mt-10 flex justify-center gap-4">
      <a href="#" class="bg-white text-indigo-700 px-6 py-3 rounded-md font-medium hover:bg-indigo-50">Get started</a>
      <a href="#" class="border border-white text-white px-6 py-3 rounded-md font-medium hover:bg-indigo-600">Learn more</a>
    </div>
  </div>
</section>"##;

const SECTION: &str = r##"
<section class="py-16 bg-white">
  <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
    <h2 class="text-3xl font-bold text-gray-900 mb-6">Section title</h2>
    <p class="text-lg text-gray-600 mb-4">
      Use this section to tell your story, present a product or explain how your service works.
    </p>
    <p class="text-lg text-gray-600">
      Replace this text with your own content and adjust the layout to fit your page.
    </p>
  </div>
</section>"##;

const FEATURES: &str = r##"
<section class="py-16 bg-gray-50">
  <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
    <h2 class="text-3xl font-bold text-center text-gray-900 mb-12">Features</h2>
    <div class="grid gap-8 md:grid-cols-3">
      <div class="bg-white p-6 rounded-lg shadow">
        <h3 class="text-xl font-semibold text-gray-900 mb-2">Fast</h3>
        <p class="text-gray-600">Pages load quickly on every device.</p>
      </div>
      <div class="bg-white p-6 rounded-lg shadow">
        <h3 class="text-xl font-semibold text-gray-900 mb-2">Responsive</h3>
        <p class="text-gray-600">The layout adapts to phones, tablets and desktops.</p>
      </div>
      <div class="bg-white p-6 rounded-lg shadow">
        <h3 class="text-xl font-semibold text-gray-900 mb-2">Customizable</h3>
        <p class="text-gray-600">Change colors, text and images to match your brand.</p>
      </div>
    </div>
  </div>
</section>"##;

const TESTIMONIALS: &str = r##"
<section class="py-16 bg-white">
  <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
    <h2 class="text-3xl font-bold text-center text-gray-900 mb-12">What our customers say</h2>
    <div class="grid gap-8 md:grid-cols-2">
      <blockquote class="p-6 bg-gray-50 rounded-lg">
        <p class="text-gray-700 italic">"A wonderful experience from start to finish."</p>
        <footer class="mt-4 text-sm font-semibold text-gray-900">Jane Doe, Designer</footer>
      </blockquote>
      <blockquote class="p-6 bg-gray-50 rounded-lg">
        <p class="text-gray-700 italic">"The team understood exactly what we needed."</p>
        <footer class="mt-4 text-sm font-semibold text-gray-900">John Smith, Founder</footer>
      </blockquote>
    </div>
  </div>
</section>"##;

const CONTACT: &str = r##"
<section class="py-16 bg-gray-50">
  <div class="max-w-xl mx-auto px-4 sm:px-6 lg:px-8">
    <h2 class="text-3xl font-bold text-center text-gray-900 mb-8">Contact us</h2>
    <form class="space-y-4">
      <input type="text" placeholder="Name" class="w-full px-4 py-2 border border-gray-300 rounded-md">
      <input type="email" placeholder="Email" class="w-full px-4 py-2 border border-gray-300 rounded-md">
      <textarea rows="4" placeholder="Message" class="w-full px-4 py-2 border border-gray-300 rounded-md"></textarea>
      <button type="submit" class="w-full bg-indigo-600 text-white px-4 py-2 rounded-md hover:bg-indigo-700">
        Send
      </button>
    </form>
  </div>
</section>"##;

const FOOTER: &str = r##"
<footer class="bg-gray-800">
  <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
    <div class="flex flex-col md:flex-row justify-between items-center">
      <span class="text-white font-bold text-lg">LOGO</span>
      <nav class="flex space-x-6 mt-4 md:mt-0">
        <a href="#" class="text-gray-400 hover:text-white">Privacy</a>
        <a href="#" class="text-gray-400 hover:text-white">Terms</a>
        <a href="#" class="text-gray-400 hover:text-white">Contact</a>
      </nav>
    </div>
    <p class="mt-8 text-center text-gray-400 text-sm">&copy; 2024 Your Company. All rights reserved.</p>
  </div>
</footer>"##;

const CUSTOM: &str = r##"
<div class="py-8 px-4 bg-white">
  <div class="max-w-7xl mx-auto">
    <h2 class="text-2xl font-bold mb-4">Custom component</h2>
    <p class="text-gray-600">
      This is a custom component you can adapt to your needs.
      Change the text, add images, adjust the colors and more.
    </p>
    <div class="mt-6 p-4 bg-gray-100 rounded-lg">
      <p class="text-gray-800">
        Use the code editor to customize this component with HTML and Tailwind CSS classes.
      </p>
    </div>
  </div>
</div>"##;
