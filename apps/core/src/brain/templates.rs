//! Canned response texts for the course assistant.
//!
//! Content blocks, not logic. Kept verbatim; the widget renders them as plain text.

pub const SERVICES_OVERVIEW: &str = r#"I'm excited to tell you about our comprehensive AI Course Generator platform! Here's what we offer:

🎯 **Core Services:**
- **AI-Powered Course Generation** - Create complete courses in minutes
- **Custom Learning Paths** - Tailored to your specific needs
- **Interactive Content Creation** - Quizzes, assignments, and projects
- **Multi-format Export** - PDF, HTML, and video scripts

🛠️ **Key Features:**
- Smart syllabus creation based on your requirements
- Automatic generation of notes, presentations, and study materials
- AI-driven assessment creation (tests, quizzes, exercises)
- Content adaptation for different learning levels
- Integration with popular learning management systems

💡 **Perfect For:**
- Educators creating professional courses
- Students seeking personalized study plans
- Businesses developing training materials
- Content creators building educational content

🆓 **Free Plan** - Get started with 5 courses/month
⭐ **Educator Plan** ($29/month) - Unlimited courses & premium features
🏢 **Institution Plan** ($99/month) - Team collaboration & advanced analytics

Would you like me to explain any specific service in detail or help you get started?"#;

pub const COURSE_BEGINNER_AI: &str = r#"Absolutely! I'll help you create a beginner-friendly AI course. Here's what we'll include:

📚 **Course Structure:**
1. **Introduction to AI** - What is AI and its applications
2. **Python Basics** - Essential programming foundation
3. **Machine Learning Fundamentals** - Supervised/Unsupervised learning
4. **Neural Networks Basics** - Understanding how AI learns
5. **Hands-on Projects** - Build your first AI model

Would you like me to generate this course for you now? It's completely free to start!"#;

pub const COURSE_THREE_MONTH_SYLLABUS: &str = r#"I'll create a comprehensive 3-month AI course syllabus for you:

**Month 1: Foundations**
- Week 1-2: Python Programming & Data Structures
- Week 3-4: Mathematics for AI (Linear Algebra, Statistics)

**Month 2: Machine Learning**
- Week 5-6: Supervised Learning Algorithms
- Week 7-8: Unsupervised Learning & Neural Networks

**Month 3: Deep Learning & Projects**
- Week 9-10: Deep Learning with TensorFlow/PyTorch
- Week 11-12: Capstone Project & Deployment

Would you like me to customize this plan based on your specific goals?"#;

pub const COURSE_PERSONALIZED_PATH: &str = r#"I'd love to create a personalized AI learning path for you! To make it perfect, could you tell me:

1. Your current skill level (beginner/intermediate/advanced)?
2. Your primary goal (career change/skill upgrade/research)?
3. How much time can you dedicate weekly?

Based on your answers, I'll create a tailored learning path with milestones and resources!"#;

pub const COURSE_CREATION_GENERIC: &str = r#"I can help you create a complete AI course! Our platform specializes in generating:

- Custom course outlines
- Interactive lessons
- Practice exercises
- Assessment materials

What type of course would you like to create?"#;

pub const TOOLS_TENSORFLOW_VS_PYTORCH: &str = r#"Here's a clear comparison of TensorFlow and PyTorch:

**TensorFlow:**
- Developed by Google
- Better for production deployment
- More mature ecosystem
- Preferred in industry
- Static computation graphs

**PyTorch:**
- Developed by Facebook/Meta
- More intuitive and pythonic
- Better for research
- Dynamic computation graphs
- Easier debugging

For beginners, I recommend starting with PyTorch due to its simplicity. Want me to create a course for either framework?"#;

pub const TOOLS_JUPYTER_VS_COLAB: &str = r#"Both are excellent, but here's my recommendation:

**Google Colab is better for beginners because:**
- No installation required
- Free GPU access
- Cloud-based (access anywhere)
- Pre-installed libraries
- Easy sharing

**Jupyter Notebook is better when:**
- You need local control
- Working with sensitive data
- Custom environment needed
- Offline work required

For AI learning, start with Colab! Would you like a tutorial on setting it up?"#;

pub const AI_TOOLS_GENERIC: &str = r#"I can guide you through the best AI tools for your needs. Popular options include:

- TensorFlow & PyTorch for deep learning
- Jupyter Notebook & Google Colab for development
- Pandas & NumPy for data manipulation
- Scikit-learn for machine learning

Which specific tools are you interested in learning more about?"#;

pub const CONCEPTS_AI_ML_DL: &str = r#"Let me break this down simply:

🤖 **AI (Artificial Intelligence):**
- The broadest concept - machines mimicking human intelligence
- Includes everything from simple rules to complex systems

🧠 **ML (Machine Learning):**
- A subset of AI
- Systems learn from data without explicit programming
- Examples: spam filters, recommendation systems

🔮 **Deep Learning:**
- A subset of ML
- Uses neural networks with multiple layers
- Examples: image recognition, voice assistants

Think of it as: AI > ML > Deep Learning

Would you like me to create a visual course explaining these concepts?"#;

pub const AI_CONCEPTS_GENERIC: &str = r#"I'd be happy to explain AI concepts! Common topics include:

- AI vs ML vs Deep Learning
- Supervised vs Unsupervised Learning
- Neural Networks & Deep Learning
- Natural Language Processing
- Computer Vision

Which concept would you like me to explain in detail?"#;

pub const PROJECTS_BEGINNER: &str = r#"Here are 5 perfect beginner AI projects:

1. **Iris Flower Classification** 🌸
   - Classic ML project
   - Learn data preprocessing & classification

2. **Movie Recommendation System** 🎬
   - Collaborative filtering
   - Great for understanding algorithms

3. **Sentiment Analysis** 😊😢
   - Natural Language Processing
   - Analyze text emotions

4. **Image Classification with MNIST** 🔢
   - Digit recognition
   - Introduction to neural networks

5. **Chatbot with Rule-Based System** 💬
   - Basic conversation flow
   - Foundation for advanced bots

Which project interests you most? I can create a step-by-step guide!"#;

pub const PROGRAMMING_PROJECTS_GENERIC: &str = r#"I can help you find the perfect AI project! Here are some popular options:

- Image Classification
- Sentiment Analysis
- Chatbot Development
- Recommendation Systems
- Time Series Prediction

What's your experience level, and what type of project interests you?"#;

pub const CAREER_SALARY: &str = r#"AI Engineer salaries are quite competitive! Here's the current landscape:

💰 **Entry Level (0-2 years):**
- $80,000 - $120,000/year

💼 **Mid-Level (3-5 years):**
- $120,000 - $180,000/year

🚀 **Senior Level (5+ years):**
- $180,000 - $300,000+/year

Factors affecting salary:
- Location (Silicon Valley pays highest)
- Company size (FAANG offers premium)
- Specialization (ML Ops, Computer Vision)
- Education level

Want to know how to reach these salary levels? I can create a career roadmap for you!"#;

pub const CAREER_GENERIC: &str = r#"AI careers offer excellent opportunities! Here's what you should know:

- Popular roles: AI Engineer, Data Scientist, ML Engineer
- Salary ranges: $80k-$300k+ based on experience
- Required skills: Python, ML frameworks, mathematics
- Growth potential: High demand across industries

Would you like specific guidance on starting or advancing your AI career?"#;

pub const GENAI_WHAT_IS: &str = r#"Generative AI is fascinating! Here's a clear explanation:

🎨 **What is Generative AI?**
AI systems that create new content - text, images, audio, video, or code.

🔑 **Key Examples:**
- ChatGPT - Generates human-like text
- DALL-E - Creates images from descriptions
- GitHub Copilot - Writes code
- Midjourney - Produces artwork

🎯 **How it works:**
1. Trained on massive datasets
2. Learns patterns and relationships
3. Generates new, original content

Want to learn how to build with generative AI? Our Educator Plan includes advanced AI courses!"#;

pub const GENERATIVE_AI_GENERIC: &str = r#"Generative AI is revolutionizing content creation! I can help you understand:

- How ChatGPT and large language models work
- Image generation with DALL-E and Stable Diffusion
- Fine-tuning and prompt engineering
- Building applications with LLMs

What aspect of generative AI interests you most?"#;

pub const TIME_HOW_LONG: &str = r#"The timeline varies based on your goals and background:

🚀 **Fast Track (3-6 months):**
- Basic AI concepts
- Simple ML projects
- Entry-level job ready

📚 **Comprehensive (6-12 months):**
- Strong foundations
- Multiple projects
- Mid-level positions

🎓 **Expert Level (1-2 years):**
- Advanced concepts
- Research papers
- Senior roles

Your journey depends on:
- Prior programming experience
- Time commitment (10-20 hrs/week recommended)
- Learning resources quality

Want a personalized timeline? Tell me about your background and I'll create one!"#;

pub const TIME_RELATED_GENERIC: &str = r#"Learning AI timelines depend on your goals and dedication:

- Basics: 3-6 months
- Professional level: 6-12 months
- Expert level: 1-2+ years

I can create a personalized timeline based on your availability and objectives. How much time can you dedicate weekly?"#;

pub const BACKGROUND_NO_CODING: &str = r#"Absolutely! You can learn AI without prior coding experience. Here's your path:

🌟 **Your AI Journey (No Coding Background):**

1. **Start with Basics (Month 1):**
   - Python fundamentals
   - Basic programming concepts
   - Practice with simple exercises

2. **Build Foundation (Month 2-3):**
   - Data manipulation with Pandas
   - Basic statistics
   - Simple ML algorithms

3. **AI Concepts (Month 4-6):**
   - Machine learning basics
   - Neural networks introduction
   - Hands-on projects

🎯 **Success Tips:**
- Dedicate 1-2 hours daily
- Focus on practical projects
- Join our community for support

Ready to start? I'll guide you every step of the way!"#;

pub const BACKGROUND_CHECK_GENERIC: &str = r#"You can definitely learn AI without prior coding experience! I'll create a personalized pathway that:

- Starts with Python basics
- Gradually introduces AI concepts
- Provides hands-on practice
- Offers continuous support

Would you like me to create your beginner-friendly learning plan?"#;

pub const WEBSITE_DOWNLOAD_SAVE: &str = r#"Yes! You can download and save your AI-generated courses:

📥 **Download Options:**
- PDF format - Perfect for offline reading
- Interactive HTML - Includes quizzes
- Video scripts - For content creation
- Complete course package - All materials

💾 **Save Features:**
- Auto-save to your account
- Cloud storage integration
- Version history
- Easy sharing options

These features are available in our Educator Plan. Would you like to try it with a 14-day free trial?"#;

pub const WEBSITE_EDIT: &str = r#"Absolutely! Our platform offers full editing capabilities:

✏️ **Editing Features:**
- Modify any generated content
- Add your own materials
- Customize branding
- Adjust difficulty levels
- Reorder modules

🎨 **Customization Options:**
- Your logo and colors
- Custom templates
- Personalized assessments
- Interactive elements

Want to see these features in action? Start with our free trial!"#;

pub const WEBSITE_FEATURES_GENERIC: &str = r#"Our platform offers powerful features for course creation:

- AI-powered content generation
- Customizable templates
- Multi-format exports (PDF, HTML, Video)
- Interactive quizzes and assignments
- Progress tracking and analytics

Would you like to see a demo of any specific feature?"#;

pub const TRENDS_FUTURE_2025: &str = r#"The future of AI is incredibly exciting! Here are the key trends for 2025:

🚀 **Top AI Trends:**

1. **Multimodal AI**
   - Systems understanding text, images, and audio together
   - More natural human-AI interaction

2. **AI Agents**
   - Autonomous systems completing complex tasks
   - Personal AI assistants becoming mainstream

3. **Edge AI**
   - AI running on local devices
   - Faster, more private processing

4. **Responsible AI**
   - Focus on ethics and transparency
   - Regulation and standards

5. **AI in Education**
   - Personalized learning at scale
   - AI tutors and course generators (like us!)

Want to stay ahead of these trends? Our platform helps you master future-ready AI skills!"#;

pub const AI_TRENDS_GENERIC: &str = r#"AI is rapidly evolving! Key trends include:

- Multimodal AI (text, image, audio)
- AI Agents and automation
- Edge AI for local processing
- Ethics and responsible AI
- Personalized education with AI

Would you like to explore any of these trends in depth?"#;

pub const PRICING_FREE: &str = r#"Yes! We offer multiple options including free access:

🆓 **Free Plan Includes:**
- 5 AI-generated courses per month
- Basic templates
- Community support
- PDF downloads

⭐ **Upgrade Benefits ($29/month):**
- Unlimited course generation
- Advanced AI models
- Priority support
- Custom branding
- API access

Want to start with the free plan? Click here: [Get Started Free](/dashboard)"#;

pub const PRICING_GENERIC: &str = r#"We offer flexible pricing options:

🆓 **Free Plan:**
- 5 courses per month
- Basic features
- Community support

⭐ **Educator Plan - $29/month**
- Unlimited courses
- Premium features
- Priority support

🏢 **Institution Plan - $99/month**
- Team collaboration
- Advanced analytics
- Custom integrations

Which plan interests you? I can help you choose the best option!"#;

pub const SERVICES_EXACT: &str = r#"I'm glad you asked about our services! Our AI Course Generator platform offers:

🎯 **Main Services:**
1. AI-powered course creation
2. Custom learning path generation
3. Interactive content development
4. Multi-format exports

💡 **Key Benefits:**
- Save hours of content creation time
- Generate professional-quality materials
- Personalize learning experiences
- Access advanced AI tools

Would you like me to explain any specific service in detail?"#;

pub const CAPABILITY_MENU: &str = r#"I'm your AI Course Assistant, here to help you create amazing educational content! I can assist with:

📚 Course creation and customization
💡 AI learning guidance
💰 Pricing and plan information
🛠️ Platform features and capabilities
🎓 Career advice in AI
🚀 Latest AI trends and tools

What specific information would you like to know?"#;

/// First bot message of every session.
pub const WELCOME: &str = "Hi there! 👋 I'm your AI Course Assistant. How can I help you today?";

/// Echo prompt used when nothing matched but an earlier turn had an intent.
pub fn follow_up(previous_intent: &str) -> String {
    format!(
        "I understand you're interested in {}. Could you please be more specific about what you'd like to know? I'm here to help!",
        previous_intent
    )
}
